use gravatar_core::{avatar_url, build, process, AvatarRequest, EmailHash, TagContext, TagOutput};

const TEST_HASH: &str = "55502f40dc8b7c769880b10874abc9d0";

fn url_for(request: AvatarRequest) -> String {
    build(&request).url.into_string()
}

#[test]
fn blank_emails_hash_to_empty_digest() {
    for email in [None, Some(""), Some("   ")] {
        let request = AvatarRequest {
            email: email.map(str::to_string),
            ..AvatarRequest::default()
        };
        let url = url_for(request);
        assert!(url.contains(EmailHash::EMPTY), "unexpected url: {url}");
    }
}

#[test]
fn case_and_padding_do_not_change_hash() {
    for email in ["test@example.com", "TEST@EXAMPLE.COM", "  test@example.com  "] {
        let url = url_for(AvatarRequest::for_email(email));
        assert!(url.contains(TEST_HASH), "unexpected url: {url}");
    }
}

#[test]
fn non_ascii_case_folds_per_character() {
    let upper = build(&AvatarRequest::for_email("ΟΔΥΣΣΕΑΣ@example.gr"));
    let lower = build(&AvatarRequest::for_email("οδυσσεασ@example.gr"));
    assert_eq!(upper.url, lower.url);

    let dotted = build(&AvatarRequest::for_email("İnfo@example.com"));
    let plain = build(&AvatarRequest::for_email("info@example.com"));
    assert_eq!(dotted.url, plain.url);
}

#[test]
fn known_hash_for_mixed_case_address() {
    let url = url_for(AvatarRequest::for_email("MyEmailAddress@example.com"));
    assert!(url.contains("0bc83cb571cd1c50ba6f3e8a78ef1346"));
}

#[test]
fn protocol_selects_scheme_and_host() {
    let secure = url_for(AvatarRequest::for_email("test@example.com").with_prefer_https(true));
    assert!(secure.starts_with("https://secure.gravatar.com/avatar/"));

    let plain = url_for(AvatarRequest::for_email("test@example.com").with_prefer_https(false));
    assert!(plain.starts_with("http://www.gravatar.com/avatar/"));
}

#[test]
fn size_defaults_to_58() {
    assert!(url_for(AvatarRequest::for_email("test@example.com")).contains("s=58"));
    assert!(url_for(AvatarRequest::for_email("test@example.com").with_size(128)).contains("s=128"));
}

#[test]
fn rating_is_always_g() {
    assert!(url_for(AvatarRequest::default()).contains("&r=g"));
}

#[test]
fn default_image_param_only_when_set() {
    let none = url_for(AvatarRequest::for_email("test@example.com"));
    assert!(!none.contains("&d="));

    let blank = url_for(AvatarRequest::for_email("test@example.com").with_default_image(" \t"));
    assert!(!blank.contains("&d="));

    let set = url_for(
        AvatarRequest::for_email("test@example.com")
            .with_default_image("https://example.com/default-avatar.png"),
    );
    assert!(set.contains("&d=https%3A%2F%2Fexample.com%2Fdefault-avatar.png"));
}

#[test]
fn force_default_param_only_when_enabled() {
    let forced =
        url_for(AvatarRequest::for_email("test@example.com").with_force_default_image(true));
    assert!(forced.contains("&f=y"));

    let unforced = url_for(AvatarRequest::for_email("test@example.com"));
    assert!(!unforced.contains("f="));
}

#[test]
fn all_options_compose_complete_url() {
    let request = AvatarRequest::for_email("test@example.com")
        .with_size(256)
        .with_default_image("https://example.com/default.jpg")
        .with_force_default_image(true)
        .with_prefer_https(false)
        .with_alt("Test avatar");
    let image = build(&request);

    let url = image.url.as_str();
    assert!(url.starts_with("http://www.gravatar.com/avatar/"));
    assert!(url.contains(TEST_HASH));
    assert!(url.contains("s=256"));
    assert!(url.contains("r=g"));
    assert!(url.contains("&f=y"));
    assert!(url.contains("&d=https%3A%2F%2Fexample.com%2Fdefault.jpg"));
    assert_eq!(image.attributes.alt, "Test avatar");
    assert_eq!(image.attributes.loading, "lazy");
}

#[test]
fn build_matches_avatar_url() {
    let request = AvatarRequest::for_email("ada@example.com").with_default_image("mp");
    assert_eq!(build(&request).url, avatar_url(&request));
}

#[test]
fn repeated_builds_are_identical() {
    let request = AvatarRequest::for_email("Ada@Example.com").with_force_default_image(true);
    assert_eq!(build(&request), build(&request));
}

#[test]
fn process_renders_gravatar_element_as_img() {
    let request = AvatarRequest::for_email("test@example.com");
    let context = TagContext::new("gravatar", "test");
    let mut output = TagOutput::new("gravatar");

    process(&request, Some(&context), Some(&mut output)).expect("process");

    assert_eq!(output.tag_name, "img");
    assert_eq!(output.attribute("alt"), Some("Gravatar image"));
    assert_eq!(output.attribute("loading"), Some("lazy"));
    let src = output.attribute("src").expect("src");
    assert!(src.starts_with("https://secure.gravatar.com/avatar/"));
    assert!(src.contains("s=58"));
    assert!(src.contains("r=g"));
}

#[test]
fn image_serializes_url_and_attributes() {
    let image = build(&AvatarRequest::for_email("test@example.com"));
    let value = serde_json::to_value(&image).expect("serialize");
    assert_eq!(value["url"], image.url.as_str());
    assert_eq!(value["attributes"]["alt"], "Gravatar image");
    assert_eq!(value["attributes"]["loading"], "lazy");
}
