//! Integration tests for environment detection.

use sitestamp::environment::{
    detect, manifest_path, nav_href, DetectedEnvironment, PageLocation, RoutingMode,
};

#[test]
fn deployment_shapes() {
    let cases = [
        ("prod.example.com", "/app1", "prod", RoutingMode::Subdomain),
        ("staging.example.com", "/", "staging", RoutingMode::Subdomain),
        ("sandbox-pr-88.example.com", "/app2", "sandbox-pr-88", RoutingMode::Subdomain),
        ("d111.cloudfront.net", "/dev/app1", "dev", RoutingMode::Path),
        ("d111.cloudfront.net", "/sandbox-x/app2/", "sandbox-x", RoutingMode::Path),
        ("localhost", "/app1", "local", RoutingMode::Subdomain),
        ("127.0.0.1", "/", "local", RoutingMode::Subdomain),
        ("www.example.com", "/about", "unknown", RoutingMode::Subdomain),
    ];

    for (host, path, env, mode) in cases {
        let detected = detect(host, path);
        assert_eq!(detected.env, env, "env for {}{}", host, path);
        assert_eq!(detected.routing_mode, mode, "mode for {}{}", host, path);
    }
}

#[test]
fn path_beats_subdomain() {
    let detected = detect("prod.example.com", "/staging/app1");
    assert_eq!(
        detected,
        DetectedEnvironment {
            env: "staging".to_string(),
            routing_mode: RoutingMode::Path,
        }
    );
}

#[test]
fn detection_is_deterministic() {
    let first = detect("example.cloudfront.net", "/sandbox-1/app2");
    let second = detect("example.cloudfront.net", "/sandbox-1/app2");
    assert_eq!(first, second);
}

#[test]
fn path_mode_links_stay_in_env() {
    let location = PageLocation::parse("https://d111.cloudfront.net/sandbox-pr-5/app2").unwrap();
    let detected = location.detect();

    for app in ["app1", "app2", "app3"] {
        assert_eq!(
            nav_href(&detected, app),
            Some(format!("/sandbox-pr-5/{}", app))
        );
    }
    assert_eq!(
        location.url_for(&manifest_path(&detected)),
        "https://d111.cloudfront.net/sandbox-pr-5/manifest.json"
    );
}

#[test]
fn subdomain_mode_uses_root_manifest() {
    let location = PageLocation::parse("https://dev.example.com:8443/app1").unwrap();
    let detected = location.detect();

    assert_eq!(nav_href(&detected, "app2"), None);
    assert_eq!(
        location.url_for(&manifest_path(&detected)),
        "https://dev.example.com:8443/manifest.json"
    );
}

#[test]
fn detected_environment_serializes_for_pages() {
    let json = serde_json::to_string(&detect("d1.cloudfront.net", "/prod/app1")).unwrap();
    assert_eq!(json, r#"{"env":"prod","routingMode":"path"}"#);
}
