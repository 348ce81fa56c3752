use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn country_json(common: &str, borders: &[&str]) -> Value {
    json!({
        "name": {
            "common": common,
            "official": format!("Republic of {}", common),
        },
        "population": 1000,
        "region": "Testregion",
        "subregion": "Northern Testregion",
        "capital": [format!("{} City", common)],
        "flags": { "svg": format!("https://flags.test/{}.svg", common.to_lowercase()) },
        "tld": [".tl"],
        "languages": { "tst": "Testish", "eng": "English" },
        "currencies": { "TSD": { "name": "Test dollar", "symbol": "$" } },
        "borders": borders,
    })
}

pub async fn mount_alpha(server: &MockServer, code: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/alpha/{}", code)))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

pub fn alpha_ok(common: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!([country_json(common, &[])]))
}
