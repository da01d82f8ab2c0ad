use crate::models::RecordId;

pub fn format_team_id(team_id: &Option<RecordId>) -> String {
    match team_id {
        Some(id) if !id.as_str().is_empty() => id.to_string(),
        _ => "N/A".to_string(),
    }
}
