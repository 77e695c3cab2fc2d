use std::hash::{DefaultHasher, Hash as _, Hasher as _};

/// Stable HSL accent for a name. Kept in the mid lightness band so the dot
/// reads against the light page background.
pub fn accent_color(name: &str) -> String {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let hash = hasher.finish();

    let hue = hash % 360;
    let saturation = 55 + (hash >> 16) % 30;
    let lightness = 40 + (hash >> 32) % 16;

    format!("hsl({hue}, {saturation}%, {lightness}%)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_stable_for_a_name() {
        assert_eq!(accent_color("Bridge"), accent_color("Bridge"));
    }

    #[test]
    fn color_is_well_formed_hsl() {
        let color = accent_color("Bridge");
        assert!(color.starts_with("hsl("));
        assert!(color.ends_with("%)"));
    }
}
