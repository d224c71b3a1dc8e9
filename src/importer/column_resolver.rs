// ==========================================
// Furniture Catalog - column resolver
// ==========================================
// Maps logical fields to actual header names via ordered candidate
// lists. Resolution is deterministic: exact equality first, then
// substring containment, candidate order deciding ties in both passes.
// ==========================================

use crate::config::CandidateLabels;
use crate::domain::catalog::ResolvedColumns;

pub struct ColumnResolver;

/// Column indices of every logical field after resolution
#[derive(Debug, Clone, Default)]
pub struct ColumnIndices {
    pub room: Option<usize>,
    pub type_name: Option<usize>,
    pub code: Option<usize>,
    pub width: Option<usize>,
    pub depth: Option<usize>,
    pub height: Option<usize>,
}

impl ColumnResolver {
    /// Resolve one logical field against flattened headers
    ///
    /// Pass 1: first candidate that exactly equals some header wins.
    /// Pass 2: first candidate contained in some header (headers scanned
    /// in declaration order) wins. Empty headers never match.
    pub fn resolve(&self, headers: &[String], candidates: &[String]) -> Option<usize> {
        for cand in candidates {
            if let Some(idx) = headers.iter().position(|h| h == cand) {
                return Some(idx);
            }
        }
        for cand in candidates {
            if let Some(idx) = headers
                .iter()
                .position(|h| !h.is_empty() && h.contains(cand.as_str()))
            {
                return Some(idx);
            }
        }
        None
    }

    /// Resolve the whole candidate table at once
    pub fn resolve_all(&self, headers: &[String], candidates: &CandidateLabels) -> ColumnIndices {
        ColumnIndices {
            room: self.resolve(headers, &candidates.room),
            type_name: self.resolve(headers, &candidates.type_name),
            code: self.resolve(headers, &candidates.code),
            width: self.resolve(headers, &candidates.width),
            depth: self.resolve(headers, &candidates.depth),
            height: self.resolve(headers, &candidates.height),
        }
    }
}

impl ColumnIndices {
    /// Header names the indices point at, for the import report
    pub fn to_resolved_columns(&self, headers: &[String]) -> ResolvedColumns {
        let name = |idx: Option<usize>| idx.and_then(|i| headers.get(i)).cloned();
        ResolvedColumns {
            room: name(self.room),
            type_name: name(self.type_name),
            code: name(self.code),
            width: name(self.width),
            depth: name(self.depth),
            height: name(self.height),
        }
    }

    /// Logical names of required fields that failed to resolve
    ///
    /// Room, type and code are mandatory; dimension columns may be absent
    /// (their values stay null).
    pub fn missing_required(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.room.is_none() {
            missing.push("room".to_string());
        }
        if self.type_name.is_none() {
            missing.push("type".to_string());
        }
        if self.code.is_none() {
            missing.push("code".to_string());
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn cands(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_beats_substring() {
        let resolver = ColumnResolver;
        // "W" is contained in "W_total", but "寸法_W" matches exactly
        let hs = headers(&["寸法_W", "W_total"]);
        assert_eq!(resolver.resolve(&hs, &cands(&["寸法_W", "W"])), Some(0));
    }

    #[test]
    fn test_later_candidate_exact_match_beats_substring() {
        let resolver = ColumnResolver;
        // 品番 only matches by containment, but the second candidate 品 番
        // matches a header exactly; the exact pass runs over all candidates
        // before any substring attempt
        let hs = headers(&["品番号", "品 番"]);
        assert_eq!(resolver.resolve(&hs, &cands(&["品番", "品 番"])), Some(1));
    }

    #[test]
    fn test_candidate_order_decides_substring_ties() {
        let resolver = ColumnResolver;
        // both headers contain some candidate; the first candidate wins
        let hs = headers(&["大品 番枠", "旧品番"]);
        assert_eq!(resolver.resolve(&hs, &cands(&["品番", "品 番"])), Some(1));
    }

    #[test]
    fn test_substring_fallback_scans_headers_in_order() {
        let resolver = ColumnResolver;
        let hs = headers(&["備考", "寸法_Ｗ(mm)"]);
        assert_eq!(resolver.resolve(&hs, &cands(&["Ｗ"])), Some(1));
    }

    #[test]
    fn test_no_match_is_none() {
        let resolver = ColumnResolver;
        let hs = headers(&["室名", "品名"]);
        assert_eq!(resolver.resolve(&hs, &cands(&["高さ"])), None);
    }

    #[test]
    fn test_empty_headers_never_match() {
        let resolver = ColumnResolver;
        let hs = headers(&["", "室名"]);
        assert_eq!(resolver.resolve(&hs, &cands(&["室名"])), Some(1));
    }

    #[test]
    fn test_missing_required_names_fields() {
        let resolver = ColumnResolver;
        let hs = headers(&["室名", "寸法_W"]);
        let indices = resolver.resolve_all(&hs, &crate::config::CandidateLabels::default());
        assert_eq!(indices.room, Some(0));
        assert_eq!(indices.width, Some(1));
        assert_eq!(indices.missing_required(), vec!["type", "code"]);
    }
}
