use gravatar_core::{build, hash_email, normalize_email, AvatarRequest, EmailHash};
use proptest::prelude::*;

fn hash_segment(url: &str) -> &str {
    let path = url
        .split("/avatar/")
        .nth(1)
        .expect("avatar path");
    path.split('?').next().expect("hash")
}

proptest! {
    #[test]
    fn case_and_padding_invariant(
        local in "[A-Za-z0-9._%+-]{1,20}",
        domain in "[A-Za-z0-9-]{1,12}\\.[A-Za-z]{2,6}",
        left in "[ \t]{0,4}",
        right in "[ \t]{0,4}",
    ) {
        let email = format!("{local}@{domain}");
        let padded = format!("{left}{}{right}", email.to_uppercase());
        let plain = build(&AvatarRequest::for_email(email.to_lowercase()));
        let noisy = build(&AvatarRequest::for_email(padded));
        prop_assert_eq!(
            hash_segment(plain.url.as_str()),
            hash_segment(noisy.url.as_str())
        );
    }

    #[test]
    fn whitespace_only_is_empty_hash(blank in "[ \t\r\n]{0,8}") {
        prop_assert!(normalize_email(Some(&blank)).is_empty());
        let hash = hash_email(Some(&blank));
        prop_assert_eq!(hash.as_str(), EmailHash::EMPTY);
    }

    #[test]
    fn hash_is_lowercase_hex(email in any::<String>()) {
        let hash = hash_email(Some(&email));
        prop_assert_eq!(hash.as_str().len(), 32);
        prop_assert!(hash.as_str().bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn build_is_deterministic(
        email in proptest::option::of("[ -~]{0,32}"),
        size in any::<i32>(),
        default_image in "[ -~]{0,24}",
        prefer_https in any::<bool>(),
        force in any::<bool>(),
    ) {
        let request = AvatarRequest {
            email,
            size,
            default_image_url: default_image,
            prefer_https,
            force_default_image: force,
            ..AvatarRequest::default()
        };
        let first = build(&request);
        let second = build(&request);
        prop_assert_eq!(first.url.as_str(), second.url.as_str());
        let expected_size = format!("?s={size}&r=g");
        prop_assert!(first.url.as_str().contains(&expected_size));
    }
}
