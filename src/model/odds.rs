use serde::ser::{Serialize, SerializeSeq, Serializer};
use strum_macros::{Display, EnumString};

/// Market type carried in an odds cell's `data-type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MarketType {
    Moneyline,
    Threeway,
}

/// Displayed American odds for one game at one sportsbook.
///
/// Values are the raw display strings; a side whose sub-cell is missing is
/// empty. Serializes as `[away, home]`, or `[away, home, draw]` when the
/// market has a draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Odds {
    pub away: String,
    pub home: String,
    pub draw: Option<String>,
}

impl Odds {
    pub fn two_way(away: impl Into<String>, home: impl Into<String>) -> Self {
        Self {
            away: away.into(),
            home: home.into(),
            draw: None,
        }
    }

    pub fn three_way(
        away: impl Into<String>,
        home: impl Into<String>,
        draw: impl Into<String>,
    ) -> Self {
        Self {
            away: away.into(),
            home: home.into(),
            draw: Some(draw.into()),
        }
    }

    /// Number of outcomes quoted: 2, or 3 with a draw.
    pub fn arity(&self) -> usize {
        if self.draw.is_some() {
            3
        } else {
            2
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        let mut values = vec![self.away.clone(), self.home.clone()];
        values.extend(self.draw.clone());
        values
    }
}

impl Serialize for Odds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.arity()))?;
        seq.serialize_element(&self.away)?;
        seq.serialize_element(&self.home)?;
        if let Some(draw) = &self.draw {
            seq.serialize_element(draw)?;
        }
        seq.end()
    }
}
