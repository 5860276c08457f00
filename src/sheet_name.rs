//! Sheet Name Module
//!
//! シート名の制約（最大31文字、使用禁止文字、予約名、大文字小文字を区別しない一意性）を
//! 満たすように、画面IDと画面名から決定的にシート名を生成するモジュール。
//!
//! # 変換規則
//!
//! 1. `[ ] : * ? / \` と制御文字を `_` に置換する
//! 2. 31文字（Unicodeスカラー値単位）に切り詰める
//! 3. 先頭と末尾の `'` を取り除く
//! 4. 空になった場合は `Sheet` とする
//! 5. 予約名 `History`（大文字小文字を区別しない）には末尾に `_` を付ける
//! 6. 既存のシート名と（大文字小文字を区別せずに）衝突した場合は、
//!    31文字に収まるように切り詰めてから `~2`, `~3`, ... を付ける
//!
//! 同じ入力列に対しては常に同じ結果になります。

use std::collections::HashSet;

/// シート名の最大文字数
pub const MAX_SHEET_NAME_CHARS: usize = 31;

const INVALID_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

const RESERVED_NAME: &str = "History";

const FALLBACK_NAME: &str = "Sheet";

/// 1つのシート名をサニタイズする（一意性は考慮しない）
pub fn sanitize_sheet_name(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| {
            if INVALID_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let truncated = truncate_chars(&replaced, MAX_SHEET_NAME_CHARS);
    let trimmed = truncated.trim_matches('\'');

    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else if trimmed.eq_ignore_ascii_case(RESERVED_NAME) {
        format!("{}_", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// シート名の検証
///
/// # 戻り値
///
/// * `Ok(())` - シート名として使用できる場合
/// * `Err(String)` - 制約に違反している場合
pub fn validate_sheet_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Empty sheet name is not allowed".to_string());
    }

    let len = name.chars().count();
    if len > MAX_SHEET_NAME_CHARS {
        return Err(format!(
            "Sheet name exceeds {} characters ({}): {}",
            MAX_SHEET_NAME_CHARS, len, name
        ));
    }

    if let Some(c) = name
        .chars()
        .find(|c| INVALID_CHARS.contains(c) || c.is_control())
    {
        return Err(format!("Invalid character {:?} in sheet name: {}", c, name));
    }

    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(format!(
            "Sheet name cannot start or end with an apostrophe: {}",
            name
        ));
    }

    if name.eq_ignore_ascii_case(RESERVED_NAME) {
        return Err(format!("Sheet name is reserved: {}", name));
    }

    Ok(())
}

/// ワークブック内で使用済みのシート名を管理し、一意なシート名を割り当てる
#[derive(Debug, Default)]
pub(crate) struct SheetNameAllocator {
    used: HashSet<String>,
}

impl SheetNameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// サニタイズして一意なシート名を割り当てる
    pub fn allocate(&mut self, raw: &str) -> String {
        let base = sanitize_sheet_name(raw);
        if self.used.insert(base.to_lowercase()) {
            return base;
        }

        let mut n = 2usize;
        loop {
            let suffix = format!("~{}", n);
            let room = MAX_SHEET_NAME_CHARS - suffix.chars().count();
            let candidate = format!("{}{}", truncate_chars(&base, room), suffix);
            if self.used.insert(candidate.to_lowercase()) {
                return candidate;
            }
            n += 1;
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
