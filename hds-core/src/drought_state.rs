use serde::Serialize;

/// Display category of a drought classification label.
///
/// The classification itself is made by the backend; this only recognizes
/// the label families so they can be colored consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DroughtState {
    Normal,
    Alert,
    Drought,
    Severe,
    Unknown,
}

impl DroughtState {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.contains("normal") || label.contains("conforto") {
            DroughtState::Normal
        } else if label.contains("alerta") {
            DroughtState::Alert
        } else if label.contains("seca") && !label.contains("severa") {
            DroughtState::Drought
        } else if label.contains("severa") || label.contains("crítico") || label.contains("critico")
        {
            DroughtState::Severe
        } else {
            DroughtState::Unknown
        }
    }

    /// Text color for the state label under the gauge.
    pub fn text_color(&self) -> &'static str {
        match self {
            DroughtState::Normal => "#15803d",
            DroughtState::Alert => "#a16207",
            DroughtState::Drought => "#c2410c",
            DroughtState::Severe => "#b91c1c",
            DroughtState::Unknown => "#64748b",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DroughtState;

    #[test]
    fn test_label_families() {
        assert_eq!(DroughtState::from_label("Normal"), DroughtState::Normal);
        assert_eq!(DroughtState::from_label("Conforto"), DroughtState::Normal);
        assert_eq!(DroughtState::from_label("ALERTA"), DroughtState::Alert);
        assert_eq!(DroughtState::from_label("Seca"), DroughtState::Drought);
        assert_eq!(DroughtState::from_label("Seca Severa"), DroughtState::Severe);
        assert_eq!(DroughtState::from_label("Crítico"), DroughtState::Severe);
        assert_eq!(DroughtState::from_label(""), DroughtState::Unknown);
        assert_eq!(DroughtState::from_label("Sem dados"), DroughtState::Unknown);
    }

    #[test]
    fn test_plain_drought_wins_over_critical_wording() {
        assert_eq!(
            DroughtState::from_label("Seca - nível crítico"),
            DroughtState::Drought
        );
        assert_eq!(
            DroughtState::from_label("Seca Severa - crítico"),
            DroughtState::Severe
        );
        assert_eq!(DroughtState::from_label("critico"), DroughtState::Severe);
    }

    #[test]
    fn test_text_colors() {
        assert_eq!(DroughtState::Severe.text_color(), "#b91c1c");
        assert_eq!(DroughtState::Unknown.text_color(), "#64748b");
    }
}
