//! Typed views of the `{ success, error, data }` wrapper the roster API puts
//! around every payload. All unwrapping happens here so call sites only ever
//! see `Player` values.

use crate::error::ApiError;
use crate::models::Player;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerListData {
    pub players: Vec<Player>,
}

impl Envelope {
    fn parse(body: Value) -> Result<Self, ApiError> {
        if !body.is_object() {
            return Err(ApiError::UnexpectedShape(format!(
                "expected a JSON object, got {}",
                body
            )));
        }
        Ok(serde_json::from_value(body)?)
    }

    fn ensure_success(&self) -> Result<(), ApiError> {
        if self.success != Some(false) {
            return Ok(());
        }
        let message = match &self.error {
            Some(Value::String(msg)) => msg.clone(),
            Some(Value::Object(obj)) => obj
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| Value::Object(obj.clone()).to_string()),
            _ => "request was not successful".to_string(),
        };
        Err(ApiError::Rejected(message))
    }
}

/// `{ data: { players: [...] } }` into the player list.
pub fn decode_player_list(body: Value) -> Result<Vec<Player>, ApiError> {
    let envelope = Envelope::parse(body)?;
    envelope.ensure_success()?;

    let data = envelope
        .data
        .ok_or_else(|| ApiError::UnexpectedShape("missing `data`".to_string()))?;

    match data.get("players") {
        Some(Value::Array(_)) => {}
        Some(other) => {
            return Err(ApiError::UnexpectedShape(format!(
                "`players` is not an array: {}",
                other
            )))
        }
        None => {
            return Err(ApiError::UnexpectedShape(
                "missing `data.players`".to_string(),
            ))
        }
    }

    let list: PlayerListData = serde_json::from_value(data)?;
    Ok(list.players)
}

/// Single-record responses. Accepts both `{ data: { <field>: {...} } }` and a
/// bare record. A bare record carries an `id` and none of the envelope keys.
pub fn decode_player(body: Value, field: &str) -> Result<Player, ApiError> {
    let mut envelope = Envelope::parse(body.clone())?;
    envelope.ensure_success()?;

    if let Some(data) = envelope.data.as_mut() {
        return match data.get_mut(field) {
            Some(record) if record.is_object() => Ok(serde_json::from_value(record.take())?),
            _ => Err(ApiError::UnexpectedShape(format!(
                "missing `data.{}`",
                field
            ))),
        };
    }

    if is_bare_record(&body) {
        return Ok(serde_json::from_value(body)?);
    }

    Err(ApiError::UnexpectedShape(format!(
        "expected `data.{}` or a bare record, got {}",
        field, body
    )))
}

fn is_bare_record(body: &Value) -> bool {
    body.get("success").is_none() && body.get("data").is_none() && body.get("id").is_some()
}

pub fn decode_deleted(body: Value) -> Result<(), ApiError> {
    match body {
        Value::Object(_) => Envelope::parse(body)?.ensure_success(),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;
    use serde_json::json;

    #[test]
    fn test_decode_player_list_keeps_order() {
        let players = decode_player_list(json!({
            "success": true,
            "error": null,
            "data": {
                "players": [
                    { "id": 1, "name": "Rex", "breed": "Beagle" },
                    { "id": 2, "name": "Fido", "breed": "Poodle" }
                ]
            }
        }))
        .unwrap();

        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rex", "Fido"]);
    }

    #[test]
    fn test_decode_player_list_rejects_non_array() {
        let err = decode_player_list(json!({ "data": { "players": { "id": 1 } } })).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));

        let err = decode_player_list(json!({ "data": {} })).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));

        let err = decode_player_list(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));
    }

    #[test]
    fn test_decode_player_list_keeps_records_with_off_type_fields() {
        let players = decode_player_list(json!({
            "data": {
                "players": [
                    { "id": 1, "name": "Rex", "breed": "Beagle" },
                    { "id": null, "name": "Ghost" },
                    { "id": 3, "name": 5, "breed": null }
                ]
            }
        }))
        .unwrap();

        assert_eq!(players.len(), 3);
        assert_eq!(players[1].id, RecordId::default());
        assert_eq!(players[1].name, "Ghost");
        assert_eq!(players[2].name, "5");
        assert_eq!(players[2].breed, "");
    }

    #[test]
    fn test_decode_player_list_reports_server_error() {
        let err = decode_player_list(json!({
            "success": false,
            "error": { "name": "NotFound", "message": "Cohort not found" },
            "data": null
        }))
        .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Cohort not found".to_string()));
    }

    #[test]
    fn test_decode_wrapped_and_bare_player() {
        let wrapped = decode_player(
            json!({ "success": true, "data": { "player": { "id": 42, "name": "Rex" } } }),
            "player",
        )
        .unwrap();
        assert_eq!(wrapped.id, RecordId::from(42));

        let bare = decode_player(json!({ "id": 42, "name": "Rex" }), "player").unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_decode_player_rejects_non_record_bodies() {
        let err = decode_player(json!({ "success": true, "error": null, "data": null }), "player")
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));

        let err = decode_player(json!({ "message": "Not Found" }), "player").unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));

        let err = decode_player(json!({ "success": true, "data": { "player": null } }), "player")
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));
    }

    #[test]
    fn test_decode_created_player() {
        let created = decode_player(
            json!({ "success": true, "data": { "newPlayer": { "id": 7, "name": "Rex", "breed": "Beagle" } } }),
            "newPlayer",
        )
        .unwrap();
        assert_eq!(created.breed, "Beagle");
    }

    #[test]
    fn test_decode_deleted() {
        assert!(decode_deleted(json!({ "success": true, "data": null })).is_ok());
        assert!(decode_deleted(json!(null)).is_ok());
        assert!(matches!(
            decode_deleted(json!({ "success": false, "error": "Player not found" })),
            Err(ApiError::Rejected(_))
        ));
    }
}
