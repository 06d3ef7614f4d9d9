use clap::Parser;
use shipping_rate::utils::{logger, validation::Validate};
use shipping_rate::{CarrierToml, CliConfig, LocalCartSource, ShippingCarrier, TieredCarrier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);
    tracing::info!("📁 Loading carrier configuration from: {}", config.config);

    let carrier_config = match CarrierToml::from_file(&config.config) {
        Ok(carrier_config) => carrier_config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", config.config, e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = carrier_config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let cart = match LocalCartSource::new(&config.cart).read_cart() {
        Ok(cart) => cart,
        Err(e) => {
            eprintln!("❌ Failed to load cart '{}': {}", config.cart, e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let carrier = TieredCarrier::from_toml(carrier_config)?;

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - weighing cart without producing a quote");
        let breakdown = carrier.weigh(&cart).await;
        for item in &breakdown.items {
            println!(
                "product {:>6}  {:>4} x {:>8.3} kg  ({} x {} x {} cm, {} kg)",
                item.product_id,
                item.quantity,
                item.chargeable_weight,
                item.dimensions.width,
                item.dimensions.height,
                item.dimensions.length,
                item.dimensions.weight,
            );
        }
        println!("total chargeable weight: {:.3} kg", breakdown.total_weight);
        println!("tier: {}", breakdown.tier);
        println!(
            "base cost: {:.2} {}",
            breakdown.base_cost, carrier.config().currency.reference
        );
        return Ok(());
    }

    match carrier.calculate(&cart).await {
        Some(quote) => println!("{}", serde_json::to_string_pretty(&quote)?),
        None => {
            tracing::info!("Carrier unavailable for this cart");
            println!("unavailable");
        }
    }

    Ok(())
}
