mod account;
mod operation;
mod teller;
mod types;

use std::io::{BufRead, Write};

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::account::bank_account::BankAccount;
use crate::operation::Operation;
use crate::teller::Teller;
use crate::teller::error::TellerError;
use crate::types::Amount;

fn parse_initial_balance(line: &str) -> Result<Amount, rust_decimal::Error> {
    line.trim().parse::<Amount>()
}

fn read_initial_balance() -> Result<Amount, Box<dyn std::error::Error>> {
    print!("Enter initial balance: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(parse_initial_balance(&line)?)
}

fn load_operations(filename: &str) -> Result<Vec<Operation>, Box<dyn std::error::Error>> {
    let file = std::fs::OpenOptions::new().read(true).open(filename.trim())?;
    Ok(operation::read_operations(std::io::BufReader::new(file)))
}

fn report(err: &TellerError) {
    match err {
        TellerError::Account(account_err) => {
            eprintln!("Caught {}: {}", account_err.kind(), account_err)
        }
        other => eprintln!("Teller error : {}", other),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut parser = Command::new("Bank Account");
    parser = parser
        .arg(
            Arg::new("file")
                .display_order(1)
                .help("Operations to replay (type,amount); runs the demonstration when omitted")
                .action(ArgAction::Set)
                .value_name("OPERATIONS.csv")
                .value_parser(clap::builder::NonEmptyStringValueParser::new()),
        )
        .arg(
            Arg::new("account")
                .long("account")
                .display_order(2)
                .help("Account number")
                .action(ArgAction::Set)
                .value_name("ID")
                .default_value("123456")
                .value_parser(clap::builder::NonEmptyStringValueParser::new()),
        )
        .arg(
            Arg::new("initial-balance")
                .long("initial-balance")
                .display_order(3)
                .help("Opening balance; prompted on stdin when omitted")
                .action(ArgAction::Set)
                .value_name("AMOUNT")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(Amount)),
        );

    let args = parser.get_matches();

    let account_number = args
        .get_one::<String>("account")
        .cloned()
        .ok_or("missing account number")?;

    let initial_balance = match args.get_one::<Amount>("initial-balance") {
        Some(amount) => *amount,
        None => read_initial_balance()?,
    };

    let operations = match args.get_one::<String>("file") {
        Some(filename) => load_operations(filename)?,
        None => Teller::demonstration(),
    };

    let mut teller = Teller::new(BankAccount::new(account_number, initial_balance));
    println!(
        "Bank Account Created: #{}",
        teller.account().account_number()
    );
    tracing::debug!(balance = %initial_balance, "account opened");

    teller.run(operations, |operation, err| {
        println!("{}", operation);
        if let Some(err) = err {
            report(err);
        }
    });
    println!("Current Balance: ${}", teller.account().balance());

    match teller.write_state() {
        Ok(output) => {
            print!("{}", output);
        }
        Err(err) => {
            eprintln!("Teller error : {}", err);
        }
    }

    Ok(())
}
