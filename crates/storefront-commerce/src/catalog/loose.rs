//! Lenient deserializers for the loosely typed product API.
//!
//! Upstream records are not strictly shaped: prices arrive as numbers or
//! numeric strings, `variation` is sometimes a single object, and `status`
//! may be a bool, a number, a string or null. Everything is normalized here
//! so the rest of the crate works with strict types.

use serde::{Deserialize, Deserializer, Serializer};

use crate::catalog::ProductStatus;
use crate::money::{Currency, Money};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Num(f64),
    Text(String),
}

impl NumberLike {
    fn to_f64(&self) -> f64 {
        match self {
            NumberLike::Num(n) => *n,
            NumberLike::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

/// A price in the default currency. Null, missing or unparseable is zero.
pub(crate) fn price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    let raw = Option::<NumberLike>::deserialize(deserializer)?;
    let amount = raw.map(|n| n.to_f64()).unwrap_or(0.0);
    Ok(Money::from_decimal(amount, Currency::default()))
}

/// Serialize a price back to the decimal form the API uses.
pub(crate) fn serialize_price<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(money.to_decimal())
}

/// A single price or a list of prices.
pub(crate) fn price_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Money>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Many(Vec<Option<NumberLike>>),
        One(NumberLike),
    }

    let to_money = |n: Option<&NumberLike>| {
        Money::from_decimal(n.map(NumberLike::to_f64).unwrap_or(0.0), Currency::default())
    };

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Many(items)) => items.iter().map(|n| to_money(n.as_ref())).collect(),
        Some(Raw::One(n)) => vec![to_money(Some(&n))],
        None => Vec::new(),
    })
}

pub(crate) fn serialize_price_list<S: Serializer>(
    prices: &[Money],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(prices.iter().map(Money::to_decimal))
}

/// A percentage or plain number. Null or missing is zero.
pub(crate) fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<NumberLike>::deserialize(deserializer)?
        .map(|n| n.to_f64())
        .unwrap_or(0.0))
}

/// A sequence that may arrive as a single object or null.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<Raw<T>>::deserialize(deserializer)? {
        Some(Raw::Many(items)) => items,
        Some(Raw::One(item)) => vec![item],
        None => Vec::new(),
    })
}

/// A sequence where null means empty.
pub(crate) fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Product status flag. Falsy values mean the product is active.
pub(crate) fn status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ProductStatus, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Num(f64),
        Text(String),
    }

    let inactive = match Option::<Raw>::deserialize(deserializer)? {
        None => false,
        Some(Raw::Bool(b)) => b,
        Some(Raw::Num(n)) => n != 0.0 && !n.is_nan(),
        Some(Raw::Text(s)) => !matches!(s.as_str(), "" | "0"),
    };

    Ok(if inactive {
        ProductStatus::Inactive
    } else {
        ProductStatus::Active
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "status")]
        status: ProductStatus,
        #[serde(default, deserialize_with = "price")]
        price: Money,
        #[serde(default, deserialize_with = "price_list")]
        prices: Vec<Money>,
        #[serde(default, deserialize_with = "one_or_many")]
        items: Vec<u32>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_status_truthiness() {
        for active in [r#"{}"#, r#"{"status":null}"#, r#"{"status":0}"#, r#"{"status":false}"#, r#"{"status":""}"#, r#"{"status":"0"}"#] {
            assert_eq!(probe(active).status, ProductStatus::Active, "{active}");
        }
        for inactive in [r#"{"status":1}"#, r#"{"status":true}"#, r#"{"status":"disabled"}"#, r#"{"status":2}"#, r#"{"status":"false"}"#, r#"{"status":"active"}"#] {
            assert_eq!(probe(inactive).status, ProductStatus::Inactive, "{inactive}");
        }
    }

    #[test]
    fn test_price_shapes() {
        assert_eq!(probe(r#"{"price": 12.5}"#).price.amount_minor, 1250);
        assert_eq!(probe(r#"{"price": "12.50"}"#).price.amount_minor, 1250);
        assert_eq!(probe(r#"{"price": "n/a"}"#).price.amount_minor, 0);
        assert_eq!(probe(r#"{"price": null}"#).price.amount_minor, 0);

        let prices = probe(r#"{"prices": [80, 100]}"#).prices;
        assert_eq!(prices.iter().map(|m| m.amount_minor).collect::<Vec<_>>(), vec![8000, 10000]);
        assert_eq!(probe(r#"{"prices": 80}"#).prices.len(), 1);
    }

    #[test]
    fn test_one_or_many() {
        assert_eq!(probe(r#"{"items": [1, 2]}"#).items, vec![1, 2]);
        assert_eq!(probe(r#"{"items": 7}"#).items, vec![7]);
        assert!(probe(r#"{"items": null}"#).items.is_empty());
    }
}
