//! Special issue endpoint DTOs

use agora_core::{SpecialIssue, SpecialIssueSet, VoteTally};
use serde::Deserialize;

/// One featured issue as the backend sends it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDto {
    pub debate_id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub pro_cnt: u32,
    #[serde(default)]
    pub con_cnt: u32,
    #[serde(default)]
    pub comment_count: u32,
}

impl From<IssueDto> for SpecialIssue {
    fn from(dto: IssueDto) -> Self {
        SpecialIssue {
            debate_id: dto.debate_id,
            title: dto.title,
            summary: dto.summary,
            tally: VoteTally::new(dto.pro_cnt, dto.con_cnt),
            comment_count: dto.comment_count,
        }
    }
}

/// Response of the aggregate `GET /special/home`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialHomeDto {
    #[serde(default)]
    pub today: Vec<IssueDto>,
    #[serde(default)]
    pub hot: Option<IssueDto>,
    #[serde(default)]
    pub balanced: Option<IssueDto>,
}

impl From<SpecialHomeDto> for SpecialIssueSet {
    fn from(dto: SpecialHomeDto) -> Self {
        SpecialIssueSet {
            today: dto.today.into_iter().map(SpecialIssue::from).collect(),
            hot: dto.hot.map(SpecialIssue::from),
            balanced: dto.balanced.map(SpecialIssue::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_dto_maps_all_slots() {
        let dto: SpecialHomeDto = serde_json::from_str(
            r#"{
                "today": [{"debateId": 1, "title": "a", "proCnt": 3, "conCnt": 1}],
                "hot": {"debateId": 2, "title": "b"},
                "balanced": null
            }"#,
        )
        .unwrap();

        let set = SpecialIssueSet::from(dto);
        assert_eq!(set.today.len(), 1);
        assert_eq!(set.today[0].ratio().agree, 75);
        assert_eq!(set.hot.as_ref().unwrap().debate_id, 2);
        assert!(set.balanced.is_none());
    }
}
