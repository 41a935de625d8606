use std::fmt::Write;

use crate::api::schema::places::GymRecord;

/// 健身房卡片视图模型
/// 给定记录与管理员标记，渲染是纯函数
#[derive(Debug, Clone, PartialEq)]
pub struct GymCard {
    pub title: String,
    pub address: String,
    pub rating_line: String,
    pub phone_line: Option<String>,
    pub website_line: Option<String>,
    pub walk_in_badge: &'static str,
    pub maps_uri: String,
    pub photo: Option<String>,
    /// 管理员可见的行内编辑入口
    pub editable: bool,
}

impl GymCard {
    pub fn from_record(record: &GymRecord, is_admin: bool) -> Self {
        let rating_line = if record.rating > 0.0 {
            format!("{} ({} reviews)", record.rating, record.user_rating_count)
        } else {
            "No ratings yet".to_string()
        };

        let walk_in_badge = if record.walk_in {
            "Walk-in Available"
        } else {
            "Appointment Only"
        };

        Self {
            title: record.display_name.clone(),
            address: record.formatted_address.clone(),
            rating_line,
            phone_line: record.national_phone_number.clone(),
            website_line: record.website_uri.clone(),
            walk_in_badge,
            maps_uri: record.google_maps_uri.clone(),
            photo: record.photos.first().cloned(),
            editable: is_admin,
        }
    }
}

/// 把一批记录渲染成命令行文本
pub fn render_cards(records: &[GymRecord], is_admin: bool) -> String {
    let mut out = String::new();
    for record in records {
        let card = GymCard::from_record(record, is_admin);
        let _ = writeln!(out, "{}", card.title);
        let _ = writeln!(out, "  {}", card.address);
        let _ = writeln!(out, "  {}", card.rating_line);
        if let Some(phone) = &card.phone_line {
            let _ = writeln!(out, "  {}", phone);
        }
        if let Some(website) = &card.website_line {
            let _ = writeln!(out, "  {}", website);
        }
        let _ = writeln!(out, "  [{}]", card.walk_in_badge);
        let _ = writeln!(out, "  {}", card.maps_uri);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> GymRecord {
        GymRecord {
            id: Some("ChIJabc123".to_string()),
            display_name: "PowerHouse Fitness".to_string(),
            formatted_address: "123 Fitness Street, Kuala Lumpur".to_string(),
            rating: 4.5,
            user_rating_count: 342,
            google_maps_uri: "https://maps.google.com/?q=PowerHouse+Fitness".to_string(),
            website_uri: Some("https://powerhousefitness.my".to_string()),
            national_phone_number: Some("+60-12-345-6789".to_string()),
            photos: vec![],
            walk_in: true,
        }
    }

    #[test]
    fn rated_gym_shows_review_count() {
        let card = GymCard::from_record(&record(), false);
        assert_eq!(card.rating_line, "4.5 (342 reviews)");
        assert_eq!(card.walk_in_badge, "Walk-in Available");
        assert!(!card.editable);
    }

    #[test]
    fn unrated_gym_shows_placeholder() {
        let mut unrated = record();
        unrated.rating = 0.0;
        unrated.walk_in = false;
        let card = GymCard::from_record(&unrated, true);
        assert_eq!(card.rating_line, "No ratings yet");
        assert_eq!(card.walk_in_badge, "Appointment Only");
        assert!(card.editable);
    }

    #[test]
    fn rendering_is_pure() {
        let records = vec![record(), record()];
        assert_eq!(render_cards(&records, true), render_cards(&records, true));
    }
}
