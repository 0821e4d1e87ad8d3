//! Preview Tint
//!
//! The two visual states of the placement preview.

/// Tint applied to the preview object: valid or blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewTint {
    Valid,
    Invalid,
}

impl PreviewTint {
    pub fn from_validity(is_valid: bool) -> Self {
        if is_valid { PreviewTint::Valid } else { PreviewTint::Invalid }
    }

    /// Translucent RGBA color for the preview material
    pub fn color(&self) -> [f32; 4] {
        match self {
            PreviewTint::Valid => [0.0, 1.0, 0.0, 0.5],
            PreviewTint::Invalid => [1.0, 0.0, 0.0, 0.5],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_validity() {
        assert_eq!(PreviewTint::from_validity(true), PreviewTint::Valid);
        assert_eq!(PreviewTint::from_validity(false), PreviewTint::Invalid);
    }

    #[test]
    fn test_colors_are_translucent() {
        assert_eq!(PreviewTint::Valid.color(), [0.0, 1.0, 0.0, 0.5]);
        assert_eq!(PreviewTint::Invalid.color()[3], 0.5);
    }
}
