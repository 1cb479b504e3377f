//! Hand-built tools and questionnaires shared by the engine tests.

use crate::types::preferences::{
    BudgetRange, ExperienceLevel, ExtendedProfile, IntegrationMethod, Preferences, UsageVolume,
};
use crate::types::tool::{
    Category, InterfaceComplexity, Price, Pricing, PricingTier, Privacy, PrivacyLevel, Tool,
};

pub(crate) fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn monthly(name: &str, price: f64) -> PricingTier {
    PricingTier {
        name: name.to_string(),
        price: Price::Amount(price),
        unit: Some("month".to_string()),
        features: Vec::new(),
        tokens: None,
        requests: None,
    }
}

/// Subscription-only code assistant with API access and team features.
pub(crate) fn copilot_like() -> Tool {
    Tool {
        id: "github-copilot".to_string(),
        vendor: "GitHub".to_string(),
        name: "GitHub Copilot".to_string(),
        category: Category::Code,
        description: "AI pair programmer that suggests code in your editor".to_string(),
        strengths: tags(&[
            "Inline code suggestions",
            "Editor integration",
            "Context-aware completions",
            "Test generation",
        ]),
        use_cases: tags(&["Code completion", "Writing unit tests", "Boilerplate generation"]),
        pricing: Pricing {
            free: None,
            subscription: Some(vec![monthly("Individual", 10.0), monthly("Business", 19.0)]),
            api: None,
        },
        technical_requirements: tags(&["Supported editor"]),
        interface_complexity: InterfaceComplexity::Simple,
        api_available: true,
        mobile_app: false,
        offline_capabilities: false,
        privacy: Privacy {
            level: PrivacyLevel::Medium,
            details: tags(&["Business plan excludes code from training"]),
        },
        team_collaboration: true,
        custom_training: false,
        release_date: Some("2021-06-29".to_string()),
        popularity: 92,
        pros: tags(&["Seamless IDE integration", "Learns your codebase", "Saves time"]),
        cons: tags(&["Suggestions can be wrong"]),
        integrations: tags(&["VS Code", "JetBrains", "Neovim"]),
        website: "https://github.com/features/copilot".to_string(),
        documentation: Some("https://docs.github.com/copilot".to_string()),
    }
}

/// Image generator offering nothing but a free tier.
pub(crate) fn free_only() -> Tool {
    Tool {
        id: "sketchpad".to_string(),
        vendor: "Sketch Labs".to_string(),
        name: "Sketchpad".to_string(),
        category: Category::Image,
        description: "Browser-based image generator".to_string(),
        strengths: tags(&["No sign-up", "Simple prompts"]),
        use_cases: tags(&["Concept art", "Social media images"]),
        pricing: Pricing {
            free: Some(PricingTier {
                name: "Free".to_string(),
                price: Price::Amount(0.0),
                unit: None,
                features: tags(&["basic"]),
                tokens: None,
                requests: None,
            }),
            subscription: None,
            api: None,
        },
        technical_requirements: Vec::new(),
        interface_complexity: InterfaceComplexity::Moderate,
        api_available: false,
        mobile_app: false,
        offline_capabilities: false,
        privacy: Privacy {
            level: PrivacyLevel::Low,
            details: Vec::new(),
        },
        team_collaboration: false,
        custom_training: false,
        release_date: None,
        popularity: 50,
        pros: tags(&["Free"]),
        cons: tags(&["Low resolution"]),
        integrations: Vec::new(),
        website: "https://sketchpad.example".to_string(),
        documentation: None,
    }
}

pub(crate) fn developer_prefs() -> Preferences {
    Preferences {
        primary_use_case: tags(&["coding"]),
        experience_level: ExperienceLevel::Developer,
        budget_range: BudgetRange::UpTo100,
        priority_factors: tags(&["quality"]),
        integration_method: vec![IntegrationMethod::Api],
        usage_volume: UsageVolume::Moderate,
        special_requirements: Vec::new(),
        extended: ExtendedProfile::default(),
    }
}

pub(crate) fn comprehensive_prefs() -> Preferences {
    Preferences {
        integration_method: vec![IntegrationMethod::Web, IntegrationMethod::Api],
        special_requirements: tags(&["team"]),
        extended: ExtendedProfile {
            industry: Some("tech".to_string()),
            content_types: Some(tags(&["technical-docs"])),
            programming_languages: Some(tags(&["rust", "python"])),
            team_size: Some("small-team".to_string()),
            current_tools: Some(tags(&["github-copilot"])),
            workflow_integration: Some(tags(&["ide-plugin"])),
            languages: Some(tags(&["english"])),
            data_sensitivity: Some("internal".to_string()),
            ..ExtendedProfile::default()
        },
        ..developer_prefs()
    }
}
