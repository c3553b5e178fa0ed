//! Static option lists offered by the onboarding forms.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Institute {
    pub code: &'static str,
    pub name: &'static str,
}

pub const INSTITUTES: [Institute; 6] = [
    Institute { code: "KV", name: "Kendriya Vidyalaya" },
    Institute { code: "NV", name: "Navodaya Vidyalaya" },
    Institute { code: "DAV", name: "DAV Public School" },
    Institute { code: "DPS", name: "Delhi Public School" },
    Institute { code: "CBSE", name: "CBSE Model School" },
    Institute { code: "STATE", name: "State Government School" },
];

pub const GRADES: [&str; 7] = ["6", "7", "8", "9", "10", "11", "12"];

#[must_use]
pub fn find_institute(code: &str) -> Option<&'static Institute> {
    INSTITUTES.iter().find(|inst| inst.code == code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeCategory {
    pub value: &'static str,
    pub label: &'static str,
}

pub const AGE_CATEGORIES: [AgeCategory; 3] = [
    AgeCategory { value: "10-14", label: "10-14 years (Middle School)" },
    AgeCategory { value: "15-18", label: "15-18 years (High School)" },
    AgeCategory { value: "19-24", label: "19-24 years (College/University)" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerPreview {
    pub title: &'static str,
    pub description: &'static str,
    pub salary: &'static str,
    pub growth: &'static str,
}

pub const CAREER_PREVIEWS: [CareerPreview; 6] = [
    CareerPreview {
        title: "Software Engineer",
        description: "Build innovative tech solutions",
        salary: "₹6-25 LPA",
        growth: "High",
    },
    CareerPreview {
        title: "Doctor / Medical",
        description: "Heal and care for patients",
        salary: "₹8-30 LPA",
        growth: "Stable",
    },
    CareerPreview {
        title: "IAS Officer",
        description: "Serve the nation in administration",
        salary: "₹10-20 LPA",
        growth: "Prestigious",
    },
    CareerPreview {
        title: "Chartered Accountant",
        description: "Master the world of finance",
        salary: "₹7-25 LPA",
        growth: "High",
    },
    CareerPreview {
        title: "Lawyer / Advocate",
        description: "Fight for justice",
        salary: "₹5-30 LPA",
        growth: "Growing",
    },
    CareerPreview {
        title: "Creative Designer",
        description: "Create visual experiences",
        salary: "₹4-15 LPA",
        growth: "Rising",
    },
];
