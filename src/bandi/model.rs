use serde::de::{self, Deserialize, Deserializer};
use serde_json::{Map, Value};

/// The eight exported attributes of a grant announcement, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Code,
    Title,
    GeneralDirection,
    Entity,
    MembershipOpenDate,
    MembershipCloseDate,
    InstrumentType,
    Submitted,
}

/// Binds a source JSON key to a record field and the header shown in the
/// exported sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    pub field: Field,
}

/// Field mapping consulted both when decoding records and when laying out the
/// sheet. Position in this table is the column position.
pub const COLUMNS: [Column; 8] = [
    Column { key: "codice_bando", header: "Codice Bando", field: Field::Code },
    Column { key: "titolo_bando", header: "Titolo Bando", field: Field::Title },
    Column {
        key: "direzione_generale",
        header: "Direzione Generale",
        field: Field::GeneralDirection,
    },
    Column { key: "ente", header: "Ente", field: Field::Entity },
    Column {
        key: "apertura_adesione",
        header: "Apertura Adesione",
        field: Field::MembershipOpenDate,
    },
    Column {
        key: "chiusura_adesione",
        header: "Chiusura Adesione",
        field: Field::MembershipCloseDate,
    },
    Column { key: "tipo_strumento", header: "Tipo Strumento", field: Field::InstrumentType },
    Column { key: "presentato", header: "Presentato", field: Field::Submitted },
];

/// A single grant announcement ("bando").
///
/// Every attribute is optional in the source dataset. Missing keys and JSON
/// `null` are stored as the empty string so consumers never deal with absent
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bando {
    pub code: String,
    pub title: String,
    pub general_direction: String,
    pub entity: String,
    pub membership_open_date: String,
    pub membership_close_date: String,
    pub instrument_type: String,
    pub submitted: String,
}

impl Bando {
    /// Returns the value stored for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Code => &self.code,
            Field::Title => &self.title,
            Field::GeneralDirection => &self.general_direction,
            Field::Entity => &self.entity,
            Field::MembershipOpenDate => &self.membership_open_date,
            Field::MembershipCloseDate => &self.membership_close_date,
            Field::InstrumentType => &self.instrument_type,
            Field::Submitted => &self.submitted,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Code => &mut self.code,
            Field::Title => &mut self.title,
            Field::GeneralDirection => &mut self.general_direction,
            Field::Entity => &mut self.entity,
            Field::MembershipOpenDate => &mut self.membership_open_date,
            Field::MembershipCloseDate => &mut self.membership_close_date,
            Field::InstrumentType => &mut self.instrument_type,
            Field::Submitted => &mut self.submitted,
        }
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        COLUMNS.iter().map(|column| self.get(column.field))
    }
}

impl<'de> Deserialize<'de> for Bando {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;
        let mut bando = Bando::default();

        for column in &COLUMNS {
            let Some(value) = object.remove(column.key) else {
                continue;
            };
            *bando.slot_mut(column.field) = value_to_text(value).map_err(|kind| {
                <D::Error as de::Error>::custom(format!(
                    "field `{}` must be a scalar, found {kind}",
                    column.key
                ))
            })?;
        }

        Ok(bando)
    }
}

fn value_to_text(value: Value) -> Result<String, &'static str> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Array(_) => Err("an array"),
        Value::Object(_) => Err("an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_source_keys_onto_fields() {
        let bando: Bando = serde_json::from_value(json!({
            "codice_bando": "RLA12023033061",
            "titolo_bando": "Bando Nuova Impresa",
            "direzione_generale": "Sviluppo Economico",
            "ente": "Regione Lombardia",
            "apertura_adesione": "2023-05-02T10:00:00.000",
            "chiusura_adesione": "2023-12-29T12:00:00.000",
            "tipo_strumento": "Contributo",
            "presentato": "SI"
        }))
        .expect("record decoded");

        assert_eq!(bando.code, "RLA12023033061");
        assert_eq!(bando.general_direction, "Sviluppo Economico");
        assert_eq!(bando.membership_close_date, "2023-12-29T12:00:00.000");
        assert_eq!(bando.submitted, "SI");
    }

    #[test]
    fn missing_and_null_values_become_empty() {
        let bando: Bando = serde_json::from_value(json!({
            "codice_bando": "X1",
            "ente": null,
            "note": "ignored"
        }))
        .expect("record decoded");

        assert_eq!(bando.code, "X1");
        assert_eq!(bando.entity, "");
        assert_eq!(bando.title, "");
        assert_eq!(bando.values().filter(|value| value.is_empty()).count(), 7);
    }

    #[test]
    fn scalars_are_kept_as_text() {
        let bando: Bando =
            serde_json::from_value(json!({ "codice_bando": 42, "presentato": true }))
                .expect("record decoded");

        assert_eq!(bando.code, "42");
        assert_eq!(bando.submitted, "true");
    }

    #[test]
    fn nested_values_are_rejected() {
        let error = serde_json::from_value::<Bando>(json!({ "ente": { "nome": "ATS" } }))
            .expect_err("object in a text field");

        assert!(error.to_string().contains("ente"));
    }

    #[test]
    fn column_table_follows_field_order() {
        let headers: Vec<&str> = COLUMNS.iter().map(|column| column.header).collect();
        assert_eq!(
            headers,
            [
                "Codice Bando",
                "Titolo Bando",
                "Direzione Generale",
                "Ente",
                "Apertura Adesione",
                "Chiusura Adesione",
                "Tipo Strumento",
                "Presentato",
            ]
        );
        assert_eq!(COLUMNS[7].field, Field::Submitted);
    }
}
