use clap::Args;
use std::sync::Arc;
use zonecheck_application::use_cases::UnrollSpfUseCase;
use zonecheck_domain::{Config, SpfFlattener};
use zonecheck_infrastructure::dns::WireExchanger;

#[derive(Args)]
pub struct SpfArgs {
    /// Domain whose SPF record is flattened
    domain: String,

    /// Include targets that may be inlined (repeatable; overrides spf.whitelist)
    #[arg(short = 'w', long = "whitelist", value_name = "DOMAIN")]
    whitelist: Vec<String>,

    /// Resolver to fetch TXT records from (defaults to query.default_server)
    #[arg(long, value_name = "ADDR")]
    resolver: Option<String>,

    /// Maximum length of the first TXT string
    #[arg(long, value_name = "BYTES")]
    first_limit: Option<usize>,
}

pub async fn run(config: &Config, args: SpfArgs) -> anyhow::Result<bool> {
    let whitelist = if args.whitelist.is_empty() {
        &config.spf.whitelist
    } else {
        &args.whitelist
    };
    let resolver = args
        .resolver
        .unwrap_or_else(|| config.query.default_server.clone());
    let first_limit = args.first_limit.unwrap_or(config.spf.first_chunk_limit);

    let exchanger = Arc::new(WireExchanger::from_config(&config.query));
    let use_case = UnrollSpfUseCase::new(
        exchanger,
        resolver,
        SpfFlattener::new(whitelist),
        first_limit,
    );

    let result = use_case.execute(&args.domain).await?;

    println!("; original   {}", result.original);
    println!("; flattened  {}", result.flattened);
    let quoted: Vec<String> = result.chunks.iter().map(|c| format!("\"{}\"", c)).collect();
    println!("{} IN TXT {}", result.domain, quoted.join(" "));

    Ok(true)
}
