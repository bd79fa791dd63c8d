/// Administrative district codes used by the Incheon open-data feeds.
pub const DISTRICTS: [(&str, &str); 10] = [
    ("28177", "연수구"),
    ("28185", "남동구"),
    ("28200", "부평구"),
    ("28237", "계양구"),
    ("28245", "서구"),
    ("28260", "강화군"),
    ("28710", "옹진군"),
    ("28110", "중구"),
    ("28140", "동구"),
    ("28170", "미추홀구"),
];

pub fn district_name(code: &str) -> Option<&'static str> {
    DISTRICTS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Label shown for codes missing from [`DISTRICTS`].
pub fn placeholder_label(code: &str) -> String {
    format!("구역({code})")
}
