use shipping_rate::{Cart, CarrierToml};

pub fn carrier_config(base_url: &str, extra: &str) -> CarrierToml {
    let content = format!(
        r#"
[carrier]
code = "tiered"
method_code = "tiered_standard"
title = "Tiered Shipping"
method_title = "Standard"
description = "Weight based delivery"

[catalog]
base_url = "{}"
timeout_ms = 200
{}
"#,
        base_url, extra
    );
    CarrierToml::from_toml_str(&content).unwrap()
}

pub fn cart(value: serde_json::Value) -> Cart {
    serde_json::from_value(value).unwrap()
}
