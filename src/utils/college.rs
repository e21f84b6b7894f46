// src/utils/college.rs

/// Suggests two institutions in `district` for an overall percentage.
///
/// Bands: 85 and above, 70 and above, 55 and above, everything else.
pub fn suggest_colleges(percentage: f64, district: &str) -> Vec<String> {
    let names: [&str; 2] = if percentage >= 85.0 {
        ["Government Science College", "University College"]
    } else if percentage >= 70.0 {
        ["District Government College", "Regional Engineering College"]
    } else if percentage >= 55.0 {
        ["Government Degree College", "Government Arts & Science College"]
    } else {
        ["Government First Grade College", "Government Diploma Institute"]
    };

    names
        .iter()
        .map(|name| format!("{}, {}", name, district))
        .collect()
}
