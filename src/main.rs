use ip_range_inventory::config::{Config, OutputFormat};
use ip_range_inventory::load_inventories;
use ip_range_inventory::logging::init_logging;
use ip_range_inventory::output::{
    print_dashboard_stats, print_inventory_csv, print_range_summaries, report_to_json,
};
use ip_range_inventory::processing::DashboardStats;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    //
    log::info!("#Start main()");

    let inventories = load_inventories(&config)?;

    let totals = DashboardStats::from_inventories(&inventories, config.stats);
    match config.output {
        OutputFormat::Text => {
            print_range_summaries(&inventories);
            print_inventory_csv(&inventories);
            print_dashboard_stats(&totals);
        }
        OutputFormat::Json => println!("{}", report_to_json(&inventories, &totals)?),
    }

    log::info!("#End main()");
    Ok(())
}
