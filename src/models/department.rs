use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Known department codes and their display labels, in catalogue order
const DEPARTMENTS: &[(&str, &str)] = &[
    ("det-gon-x3", "Dệt gòn x3"),
    ("chan-1-kim", "Chần 1 Kim"),
    ("cat-tu-dong", "Cắt tự động"),
    ("vo-nhung", "Vô Nhung"),
    ("dong-nut-gan-nhan", "Đóng nút+ gắn nhãn"),
    ("vo-gon-tam", "Vô gòn Tấm"),
    ("sua-do", "Sửa đồ"),
    ("dong-goi", "Đóng Gói"),
    ("kiem-pham", "Kiểm Phẩm"),
    ("bao-bien", "Bao Biên"),
    ("tro-li-tap-vu-khac", "Trợ lí, tạp vụ, khác..."),
    ("quan-li", "Quản lí"),
    ("van-phong", "Văn Phòng"),
];

static LABELS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| DEPARTMENTS.iter().copied().collect());

/// A department entry as offered to form clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Department {
    pub value: &'static str,
    pub label: &'static str,
}

/// Display label for a department code. Unknown codes come back unchanged.
pub fn label(code: &str) -> &str {
    LABELS.get(code).copied().unwrap_or(code)
}

pub fn is_known(code: &str) -> bool {
    LABELS.contains_key(code)
}

pub fn all() -> Vec<Department> {
    DEPARTMENTS
        .iter()
        .map(|&(value, label)| Department { value, label })
        .collect()
}
