//! Static option tables for the form selects.
//!
//! These are fixed configuration, not runtime state: the branch, vertical,
//! and section lists the form offers. Values are stored as text in the
//! draft and the database row; the tables exist so the form renderer and
//! any future admin tooling share one source of truth.

/// Engineering branch offered by the institute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    MechanicalEngineering,
    ElectricalEngineering,
    ElectronicsAndCommunication,
    EnergyAndElectricalVehicle,
    MaterialsScienceAndMetallurgical,
    MathematicsAndDataScience,
    ComputerScienceAndEngineering,
    CivilEngineering,
    ChemicalEngineering,
    EngineeringAndComputationalMechanics,
    Architecture,
    Planning,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::MechanicalEngineering,
        Branch::ElectricalEngineering,
        Branch::ElectronicsAndCommunication,
        Branch::EnergyAndElectricalVehicle,
        Branch::MaterialsScienceAndMetallurgical,
        Branch::MathematicsAndDataScience,
        Branch::ComputerScienceAndEngineering,
        Branch::CivilEngineering,
        Branch::ChemicalEngineering,
        Branch::EngineeringAndComputationalMechanics,
        Branch::Architecture,
        Branch::Planning,
    ];

    /// Display label, which is also the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            Branch::MechanicalEngineering => "Mechanical Engineering",
            Branch::ElectricalEngineering => "Electrical Engineering",
            Branch::ElectronicsAndCommunication => "Electronics and Communication Engineering",
            Branch::EnergyAndElectricalVehicle => "Energy and Electrical Vehicle Engineering",
            Branch::MaterialsScienceAndMetallurgical => {
                "Materials Science and Metallurgical Engineering"
            }
            Branch::MathematicsAndDataScience => "Mathematics and Data Science",
            Branch::ComputerScienceAndEngineering => "Computer Science and Engineering",
            Branch::CivilEngineering => "Civil Engineering",
            Branch::ChemicalEngineering => "Chemical Engineering",
            Branch::EngineeringAndComputationalMechanics => {
                "Engineering and Computational Mechanics (Dual Degree)"
            }
            Branch::Architecture => "Architecture",
            Branch::Planning => "Planning",
        }
    }
}

/// Club vertical an applicant can join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    TechnicalExecutive,
    SponsorshipAndPromotion,
    GraphicDesigner,
    VideoEditor,
    Photographer,
    WebDeveloper,
    ContentWriter,
}

impl Vertical {
    pub const ALL: [Vertical; 7] = [
        Vertical::TechnicalExecutive,
        Vertical::SponsorshipAndPromotion,
        Vertical::GraphicDesigner,
        Vertical::VideoEditor,
        Vertical::Photographer,
        Vertical::WebDeveloper,
        Vertical::ContentWriter,
    ];

    /// Stored value (lowercase).
    pub fn value(&self) -> &'static str {
        match self {
            Vertical::TechnicalExecutive => "technical executive",
            Vertical::SponsorshipAndPromotion => "sponsorship and promotion",
            Vertical::GraphicDesigner => "graphic designer",
            Vertical::VideoEditor => "video editor",
            Vertical::Photographer => "photographer",
            Vertical::WebDeveloper => "web developer",
            Vertical::ContentWriter => "content writer",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Vertical::TechnicalExecutive => "Technical Executive",
            Vertical::SponsorshipAndPromotion => "Sponsorship and Promotion",
            Vertical::GraphicDesigner => "Graphic Designer",
            Vertical::VideoEditor => "Video Editor",
            Vertical::Photographer => "Photographer",
            Vertical::WebDeveloper => "Web Developer",
            Vertical::ContentWriter => "Content Writer",
        }
    }
}

/// Class section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    BArchA,
    BArchB,
    BPlan,
}

impl Section {
    pub const ALL: [Section; 13] = [
        Section::A,
        Section::B,
        Section::C,
        Section::D,
        Section::E,
        Section::F,
        Section::G,
        Section::H,
        Section::I,
        Section::J,
        Section::BArchA,
        Section::BArchB,
        Section::BPlan,
    ];

    /// Display label, which is also the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            Section::A => "A",
            Section::B => "B",
            Section::C => "C",
            Section::D => "D",
            Section::E => "E",
            Section::F => "F",
            Section::G => "G",
            Section::H => "H",
            Section::I => "I",
            Section::J => "J",
            Section::BArchA => "B Arch A",
            Section::BArchB => "B Arch B",
            Section::BPlan => "B Plan",
        }
    }
}
