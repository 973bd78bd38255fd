/// Inventory CLI
use clap::{App, AppSettings, Arg, SubCommand};

use invtrack::{Error, Inventory, Result};

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("invtrack")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Inventory tracker CLI")
        .arg(
            Arg::with_name("file")
                .long("file")
                .value_name("PATH")
                .help("Inventory JSON file")
                .default_value(Inventory::DEFAULT_FILE),
        )
        .subcommand(
            SubCommand::with_name("add")
                .setting(AppSettings::AllowLeadingHyphen)
                .about("Add a quantity of a product")
                .arg(Arg::with_name("name"))
                .arg(Arg::with_name("qty").allow_hyphen_values(true)),
        )
        .subcommand(
            SubCommand::with_name("rm")
                .about("Remove a quantity of a product")
                .arg(Arg::with_name("name"))
                .arg(Arg::with_name("qty")),
        )
        .subcommand(
            SubCommand::with_name("get")
                .about("Print current stock for a product")
                .arg(Arg::with_name("name")),
        )
        .subcommand(
            SubCommand::with_name("low")
                .about("List products with stock below a threshold")
                .arg(Arg::with_name("threshold").default_value("5")),
        )
        .subcommand(SubCommand::with_name("report").about("Print the full inventory"))
        .get_matches();

    let file = matches.value_of("file").unwrap().to_owned();

    match matches.subcommand() {
        ("add", sub_match) => {
            let sub_match = sub_match.unwrap();
            let name = sub_match.value_of("name").unwrap();
            let qty: i64 = sub_match
                .value_of("qty")
                .unwrap()
                .parse()
                .map_err(|_| Error::InvalidQuantity)?;

            let mut store = Inventory::open(&file)?;
            store.add(name, qty, None)?;
            store.save(&file)?;
        }
        ("rm", sub_match) => {
            let sub_match = sub_match.unwrap();
            let name = sub_match.value_of("name").unwrap();
            let qty: u64 = sub_match
                .value_of("qty")
                .unwrap()
                .parse()
                .map_err(|_| Error::InvalidQuantity)?;

            let mut store = Inventory::open(&file)?;
            match store.remove(name, qty) {
                Err(Error::NotFound) => {
                    println!("Not found");
                    std::process::exit(1);
                }
                Err(e) => {
                    // Abort on any other error
                    return Err(e);
                }
                Ok(_) => (),
            }
            store.save(&file)?;
        }
        ("get", sub_match) => {
            let name = sub_match.unwrap().value_of("name").unwrap();
            let store = Inventory::open(&file)?;
            println!("{}", store.get_stock(name));
        }
        ("low", sub_match) => {
            let threshold: u64 = sub_match
                .unwrap()
                .value_of("threshold")
                .unwrap()
                .parse()
                .map_err(|_| Error::InvalidThreshold)?;

            let store = Inventory::open(&file)?;
            for name in store.low_stock(threshold)? {
                println!("{}", name);
            }
        }
        ("report", _) => {
            let store = Inventory::open(&file)?;
            if store.is_empty() {
                println!("(empty inventory)");
            } else {
                for (name, qty) in store.iter() {
                    println!("{} -> {}", name, qty);
                }
            }
        }
        (_, _) => {
            panic!("Unexpected subcommand");
        }
    }

    Ok(())
}
