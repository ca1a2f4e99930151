use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
}

impl Comparator {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Less => "<",
            Comparator::LessEqual => "<=",
            Comparator::Greater => ">",
            Comparator::GreaterEqual => ">=",
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
        }
    }

    /// `lhs <op> threshold`
    pub fn evaluate(self, lhs: f64, threshold: f64) -> bool {
        match self {
            Comparator::Less => lhs < threshold,
            Comparator::LessEqual => lhs <= threshold,
            Comparator::Greater => lhs > threshold,
            Comparator::GreaterEqual => lhs >= threshold,
            Comparator::Equal => lhs == threshold,
            Comparator::NotEqual => lhs != threshold,
        }
    }
}

impl FromStr for Comparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Comparator::Less),
            "<=" => Ok(Comparator::LessEqual),
            ">" => Ok(Comparator::Greater),
            ">=" => Ok(Comparator::GreaterEqual),
            "==" => Ok(Comparator::Equal),
            "!=" => Ok(Comparator::NotEqual),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One named cut of a selection. Used to size and label the cutflow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    pub name: String,
    pub comparator: Comparator,
    pub value: f64,
}

impl Cut {
    pub fn new(name: impl Into<String>, comparator: Comparator, value: f64) -> Self {
        Self {
            name: name.into(),
            comparator,
            value,
        }
    }
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.comparator, self.value)
    }
}
