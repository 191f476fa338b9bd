use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A model identifier for the Responses API.
///
/// This can be a predefined model version or a custom string value for
/// models that may be added in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Model {
    /// Known model versions.
    Known(KnownModel),

    /// Custom model identifier (for future models or private deployments).
    Custom(String),
}

/// Known model versions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownModel {
    /// GPT-5.
    Gpt5,

    /// GPT-5 mini.
    Gpt5Mini,

    /// GPT-5 nano.
    Gpt5Nano,

    /// GPT-4.1.
    Gpt41,

    /// GPT-4.1 mini.
    Gpt41Mini,

    /// GPT-4o.
    Gpt4o,

    /// GPT-4o mini.
    Gpt4oMini,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownModel::Gpt5 => write!(f, "gpt-5"),
            KnownModel::Gpt5Mini => write!(f, "gpt-5-mini"),
            KnownModel::Gpt5Nano => write!(f, "gpt-5-nano"),
            KnownModel::Gpt41 => write!(f, "gpt-4.1"),
            KnownModel::Gpt41Mini => write!(f, "gpt-4.1-mini"),
            KnownModel::Gpt4o => write!(f, "gpt-4o"),
            KnownModel::Gpt4oMini => write!(f, "gpt-4o-mini"),
        }
    }
}

impl FromStr for KnownModel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpt-5" => Ok(KnownModel::Gpt5),
            "gpt-5-mini" => Ok(KnownModel::Gpt5Mini),
            "gpt-5-nano" => Ok(KnownModel::Gpt5Nano),
            "gpt-4.1" => Ok(KnownModel::Gpt41),
            "gpt-4.1-mini" => Ok(KnownModel::Gpt41Mini),
            "gpt-4o" => Ok(KnownModel::Gpt4o),
            "gpt-4o-mini" => Ok(KnownModel::Gpt4oMini),
            _ => Err(()),
        }
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        match model.parse::<KnownModel>() {
            Ok(known) => Model::Known(known),
            Err(()) => Model::Custom(model),
        }
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        Model::from(model.to_string())
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_serialization() {
        let model = Model::Known(KnownModel::Gpt5Mini);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gpt-5-mini""#);

        let model = Model::Known(KnownModel::Gpt4oMini);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gpt-4o-mini""#);
    }

    #[test]
    fn custom_model_serialization() {
        let model = Model::Custom("my-private-deployment".to_string());
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""my-private-deployment""#);
    }

    #[test]
    fn model_deserialization_known() {
        let model: Model = serde_json::from_str(r#""gpt-5-mini""#).unwrap();
        assert_eq!(model, Model::Known(KnownModel::Gpt5Mini));
    }

    #[test]
    fn model_deserialization_custom() {
        let model: Model = serde_json::from_str(r#""experimental-123""#).unwrap();
        assert_eq!(model, Model::Custom("experimental-123".to_string()));
    }

    #[test]
    fn model_from_str() {
        assert_eq!(Model::from("gpt-5"), Model::Known(KnownModel::Gpt5));
        assert_eq!(
            Model::from("not-a-model"),
            Model::Custom("not-a-model".to_string())
        );
    }

    #[test]
    fn display_round_trips() {
        for known in [
            KnownModel::Gpt5,
            KnownModel::Gpt5Mini,
            KnownModel::Gpt5Nano,
            KnownModel::Gpt41,
            KnownModel::Gpt41Mini,
            KnownModel::Gpt4o,
            KnownModel::Gpt4oMini,
        ] {
            let name = known.to_string();
            assert_eq!(name.parse::<KnownModel>(), Ok(known));
        }
    }
}
