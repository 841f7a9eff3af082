use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub serving_desc: String,
    pub carbs_g: f64,
    pub sodium_mg: f64,
    pub fluid_ml: f64,
    #[serde(default)]
    pub caffeine_mg: f64,
    #[serde(default, deserialize_with = "flag")]
    pub is_builtin: bool,
}

/// The backend stores flags as integers, so `1`/`0` arrive as often as booleans.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
    })
}

/// A user-defined food, before the server assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub category: String,
    pub serving_desc: String,
    pub carbs_g: f64,
    pub sodium_mg: f64,
    pub fluid_ml: f64,
    #[serde(default)]
    pub caffeine_mg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodsEnvelope {
    pub items: Vec<FoodItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEnvelope {
    pub item: FoodItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_builtin_and_custom_foods() {
        let json = r#"{"items": [
            {"id": 1, "name": "Gel", "category": "gel", "serving_desc": "1 sachet",
             "carbs_g": 25, "sodium_mg": 50, "fluid_ml": 0, "caffeine_mg": 0, "is_builtin": true},
            {"id": 12, "name": "Rice cake", "category": "solid", "serving_desc": "1 piece",
             "carbs_g": 30, "sodium_mg": 120, "fluid_ml": 0}
        ]}"#;

        let envelope: FoodsEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.items.len(), 2);
        assert!(envelope.items[0].is_builtin);
        assert!(!envelope.items[1].is_builtin);
        assert_eq!(envelope.items[1].carbs_g, 30.0);
    }

    #[test]
    fn accepts_integer_builtin_flags() {
        let json = r#"{"items": [
            {"id": 1, "name": "Gel", "category": "gel", "serving_desc": "1 sachet",
             "carbs_g": 25, "sodium_mg": 50, "fluid_ml": 0, "caffeine_mg": 0, "is_builtin": 1},
            {"id": 12, "name": "Rice cake", "category": "solid", "serving_desc": "1 piece",
             "carbs_g": 30, "sodium_mg": 120, "fluid_ml": 0, "caffeine_mg": 0, "is_builtin": 0}
        ]}"#;

        let envelope: FoodsEnvelope = serde_json::from_str(json).unwrap();

        assert!(envelope.items[0].is_builtin);
        assert!(!envelope.items[1].is_builtin);
    }
}
