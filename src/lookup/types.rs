//! Address record as exchanged with the upstream service and the client.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A postal-code lookup result.
///
/// Every field is a plain string copied verbatim from the upstream payload,
/// codes included. Keys the upstream omits (or sends as `null`) become empty
/// strings; keys it adds, such as the `erro` not-found flag, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddressRecord {
    #[serde(rename = "cep", deserialize_with = "nullable")]
    pub postal_code: String,

    #[serde(rename = "logradouro", deserialize_with = "nullable")]
    pub street: String,

    #[serde(rename = "complemento", deserialize_with = "nullable")]
    pub complement: String,

    #[serde(rename = "unidade", deserialize_with = "nullable")]
    pub unit: String,

    #[serde(rename = "bairro", deserialize_with = "nullable")]
    pub neighborhood: String,

    #[serde(rename = "localidade", deserialize_with = "nullable")]
    pub city: String,

    /// Two-letter state abbreviation.
    #[serde(rename = "uf", deserialize_with = "nullable")]
    pub state_code: String,

    #[serde(rename = "estado", deserialize_with = "nullable")]
    pub state: String,

    #[serde(rename = "regiao", deserialize_with = "nullable")]
    pub region: String,

    /// IBGE municipality code.
    #[serde(rename = "ibge", deserialize_with = "nullable")]
    pub municipality_code: String,

    /// GIA tax-registration indicator.
    #[serde(rename = "gia", deserialize_with = "nullable")]
    pub gia_code: String,

    /// Telephone area code (DDD).
    #[serde(rename = "ddd", deserialize_with = "nullable")]
    pub area_code: String,

    /// SIAFI treasury-system code.
    #[serde(rename = "siafi", deserialize_with = "nullable")]
    pub siafi_code: String,
}

impl AddressRecord {
    /// Decode an upstream response body.
    ///
    /// The body must be a JSON object (a bare `null` decodes to an empty
    /// record); arrays and scalars are rejected even though a derived
    /// deserializer would accept a sequence.
    pub fn from_upstream_slice(body: &[u8]) -> serde_json::Result<Self> {
        let unexpected = match serde_json::from_slice::<Value>(body)? {
            Value::Object(object) => return Self::deserialize(Value::Object(object)),
            Value::Null => return Ok(Self::default()),
            Value::Array(_) => Unexpected::Seq,
            Value::Bool(b) => Unexpected::Bool(b),
            Value::Number(_) => Unexpected::Other("number"),
            Value::String(_) => Unexpected::Other("string"),
        };
        Err(serde_json::Error::invalid_type(unexpected, &"a JSON object"))
    }
}

fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn se_praca() -> serde_json::Value {
        json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "unidade": "",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "estado": "São Paulo",
            "regiao": "Sudeste",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        })
    }

    #[test]
    fn test_upstream_keys_map_to_fields() {
        let record: AddressRecord = serde_json::from_value(se_praca()).unwrap();
        assert_eq!(record.postal_code, "01001-000");
        assert_eq!(record.street, "Praça da Sé");
        assert_eq!(record.state_code, "SP");
        assert_eq!(record.municipality_code, "3550308");
        assert_eq!(record.siafi_code, "7107");
    }

    #[test]
    fn test_serializes_all_thirteen_keys() {
        let value = serde_json::to_value(AddressRecord::default()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

        let mut expected = vec![
            "cep", "logradouro", "complemento", "unidade", "bairro", "localidade", "uf",
            "estado", "regiao", "ibge", "gia", "ddd", "siafi",
        ];
        let mut keys = keys;
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_not_found_flag_is_ignored() {
        let record: AddressRecord = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert_eq!(record, AddressRecord::default());
    }

    #[test]
    fn test_null_and_missing_become_empty() {
        let record: AddressRecord =
            serde_json::from_str(r#"{"cep": "01001-000", "logradouro": null}"#).unwrap();
        assert_eq!(record.postal_code, "01001-000");
        assert_eq!(record.street, "");
        assert_eq!(record.city, "");
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let result = serde_json::from_str::<AddressRecord>(r#"{"ibge": 3550308}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_upstream_body_must_be_an_object() {
        assert!(AddressRecord::from_upstream_slice(b"[]").is_err());
        assert!(AddressRecord::from_upstream_slice(b"\"01001000\"").is_err());
        assert!(AddressRecord::from_upstream_slice(b"<html>Bad Request</html>").is_err());
        assert!(AddressRecord::from_upstream_slice(b"").is_err());
    }

    #[test]
    fn test_upstream_null_body_is_empty_record() {
        let record = AddressRecord::from_upstream_slice(b"null").unwrap();
        assert_eq!(record, AddressRecord::default());
    }

    #[test]
    fn test_upstream_object_decodes() {
        let body = serde_json::to_vec(&se_praca()).unwrap();
        let record = AddressRecord::from_upstream_slice(&body).unwrap();
        assert_eq!(record.neighborhood, "Sé");
        assert_eq!(record.area_code, "11");
    }
}
