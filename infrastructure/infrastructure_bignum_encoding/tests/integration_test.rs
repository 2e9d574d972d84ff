//! Integration tests for infrastructure_bignum_encoding crate
//!
//! These tests carry big numbers through JSON as struct fields, optional
//! fields and newtypes, on both engines.

use entities_bignum::BigNumber;
use infrastructure_bignum_encoding::*;
use infrastructure_bignum_native::NativeInt;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Ledger {
    #[serde(with = "infrastructure_bignum_encoding::decimal_token")]
    balance: BigNumber,
    #[serde(with = "infrastructure_bignum_encoding::decimal_token::option")]
    limit: Option<BigNumber>,
    #[serde(with = "infrastructure_bignum_encoding::decimal_token::option")]
    overdraft: Option<BigNumber>,
}

fn big(text: &str) -> BigNumber {
    BigNumber::parse(text).unwrap()
}

#[test]
fn test_struct_fields_are_decimal_strings() {
    let ledger = Ledger {
        balance: big("-18446744073709551617"),
        limit: Some(big("1000000000000000000000")),
        overdraft: None,
    };
    let json = serde_json::to_string(&ledger).unwrap();
    assert_eq!(
        json,
        r#"{"balance":"-18446744073709551617","limit":"1000000000000000000000","overdraft":null}"#
    );
    let back: Ledger = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ledger);
}

#[test]
fn test_invalid_field_reports_parse_failure() {
    let err = serde_json::from_str::<Ledger>(r#"{"balance":"1e5","limit":null,"overdraft":null}"#)
        .unwrap_err();
    assert!(err.to_string().contains("Invalid numeral"), "{}", err);

    let err = serde_json::from_str::<Ledger>(r#"{"balance":15,"limit":null,"overdraft":null}"#)
        .unwrap_err();
    assert!(err.to_string().contains("a decimal integer string"), "{}", err);
}

#[test]
fn test_token_list() {
    let values: Vec<DecimalToken> = serde_json::from_str(r#"["0","-1","+42"]"#).unwrap();
    let rendered = serde_json::to_string(&values).unwrap();
    assert_eq!(rendered, r#"["0","-1","42"]"#);
}

#[test]
fn test_native_engine_token() {
    let value: DecimalToken<NativeInt> =
        serde_json::from_str("\"-340282366920938463463374607431768211456\"").unwrap();
    assert_eq!(value.bit_length(), 128);
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        "\"-340282366920938463463374607431768211456\""
    );
}
