use std::fmt::{Display, Formatter};

/// how files in a category are named inside `category/owner/`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NamingPolicy {
    /// one deterministic slot per (owner, category); a re-upload replaces the previous file
    Fixed,
    /// every upload gets a token in its name and files accumulate
    Unique,
}

/// every kind of file that can be attached to a tank. The slug doubles as the
/// top-level directory name under the upload root
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FileCategory {
    FrontView,
    RearView,
    TopView,
    UndersideView,
    FrontLhView,
    RearLhView,
    FrontRhView,
    RearRhView,
    LhSideView,
    RhSideView,
    ValvesSectionView,
    SafetyValve,
    LevelPressureGauge,
    VacuumReading,
    Certificates,
    Drawings,
    ValveReports,
}

static IMAGE_CATEGORIES: [FileCategory; 14] = [
    FileCategory::FrontView,
    FileCategory::RearView,
    FileCategory::TopView,
    FileCategory::UndersideView,
    FileCategory::FrontLhView,
    FileCategory::RearLhView,
    FileCategory::FrontRhView,
    FileCategory::RearRhView,
    FileCategory::LhSideView,
    FileCategory::RhSideView,
    FileCategory::ValvesSectionView,
    FileCategory::SafetyValve,
    FileCategory::LevelPressureGauge,
    FileCategory::VacuumReading,
];

impl FileCategory {
    pub fn slug(&self) -> &'static str {
        match self {
            FileCategory::FrontView => "frontview",
            FileCategory::RearView => "rearview",
            FileCategory::TopView => "topview",
            FileCategory::UndersideView => "undersideview",
            FileCategory::FrontLhView => "frontlhview",
            FileCategory::RearLhView => "rearlhview",
            FileCategory::FrontRhView => "frontrhview",
            FileCategory::RearRhView => "rearrhview",
            FileCategory::LhSideView => "lhsideview",
            FileCategory::RhSideView => "rhsideview",
            FileCategory::ValvesSectionView => "valvessectionview",
            FileCategory::SafetyValve => "safetyvalve",
            FileCategory::LevelPressureGauge => "levelpressuregauge",
            FileCategory::VacuumReading => "vacuumreading",
            FileCategory::Certificates => "certificates",
            FileCategory::Drawings => "drawings",
            FileCategory::ValveReports => "valvereports",
        }
    }

    /// the human-readable label used by clients and the report compositor
    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::FrontView => "Front View",
            FileCategory::RearView => "Rear View",
            FileCategory::TopView => "Top View",
            FileCategory::UndersideView => "Underside View",
            FileCategory::FrontLhView => "Front Left Hand View",
            FileCategory::RearLhView => "Rear Left Hand View",
            FileCategory::FrontRhView => "Front Right Hand View",
            FileCategory::RearRhView => "Rear Right Hand View",
            FileCategory::LhSideView => "Left Hand Side View",
            FileCategory::RhSideView => "Right Hand Side View",
            FileCategory::ValvesSectionView => "Valves Section View",
            FileCategory::SafetyValve => "Safety Valve",
            FileCategory::LevelPressureGauge => "Level Pressure Gauge",
            FileCategory::VacuumReading => "Vacuum Reading",
            FileCategory::Certificates => "Certificate",
            FileCategory::Drawings => "Drawing",
            FileCategory::ValveReports => "Valve Test Report",
        }
    }

    pub fn from_slug(slug: &str) -> Option<FileCategory> {
        let normalized = slug.to_lowercase();
        let all = [
            FileCategory::FrontView,
            FileCategory::RearView,
            FileCategory::TopView,
            FileCategory::UndersideView,
            FileCategory::FrontLhView,
            FileCategory::RearLhView,
            FileCategory::FrontRhView,
            FileCategory::RearRhView,
            FileCategory::LhSideView,
            FileCategory::RhSideView,
            FileCategory::ValvesSectionView,
            FileCategory::SafetyValve,
            FileCategory::LevelPressureGauge,
            FileCategory::VacuumReading,
            FileCategory::Certificates,
            FileCategory::Drawings,
            FileCategory::ValveReports,
        ];
        all.into_iter().find(|c| c.slug() == normalized)
    }

    /// drawings accumulate one row per upload, so their files must accumulate
    /// too; everything else lives in a fixed slot and overwrites
    pub fn naming_policy(&self) -> NamingPolicy {
        match self {
            FileCategory::Drawings => NamingPolicy::Unique,
            _ => NamingPolicy::Fixed,
        }
    }

    pub fn is_image(&self) -> bool {
        IMAGE_CATEGORIES.contains(self)
    }

    /// the image categories in the order the report gallery renders them
    pub fn image_categories() -> &'static [FileCategory] {
        &IMAGE_CATEGORIES
    }
}

impl Display for FileCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod file_category_tests {
    use super::*;

    #[test]
    fn from_slug_is_case_insensitive() {
        assert_eq!(
            Some(FileCategory::FrontView),
            FileCategory::from_slug("FrontView")
        );
        assert_eq!(None, FileCategory::from_slug("sideways"));
    }

    #[test]
    fn drawings_accumulate_everything_else_overwrites() {
        assert_eq!(NamingPolicy::Unique, FileCategory::Drawings.naming_policy());
        assert_eq!(
            NamingPolicy::Fixed,
            FileCategory::Certificates.naming_policy()
        );
        assert_eq!(NamingPolicy::Fixed, FileCategory::TopView.naming_policy());
    }

    #[test]
    fn image_categories_excludes_document_types() {
        assert!(FileCategory::FrontView.is_image());
        assert!(!FileCategory::Certificates.is_image());
        assert!(!FileCategory::Drawings.is_image());
        assert_eq!(14, FileCategory::image_categories().len());
    }
}
