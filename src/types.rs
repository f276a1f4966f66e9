use rust_decimal::Decimal;

pub type Amount = Decimal;
pub type AccountNumber = String;
