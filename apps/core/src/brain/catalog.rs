//! Portfolio catalog: the built-in intent table and JSON catalog files.
//!
//! Catalog file format:
//!
//! ```json
//! {
//!   "fallback": "Ask me something else!",
//!   "welcome": "Hello! How can I help?",
//!   "categories": [
//!     { "name": "greetings", "keywords": ["hello", "hi"], "responses": ["Hi!"] }
//!   ]
//! }
//! ```
//!
//! Array order is evaluation order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use super::intent::{IntentCategory, IntentTable};
use crate::error::AppError;

/// Shown when no category matches.
pub const DEFAULT_FALLBACK: &str = "That's an interesting question! For more specific details, I'd recommend reaching out to Sara directly at sarahussain1398@gmail.com";

/// First bot message of every chat.
pub const DEFAULT_WELCOME: &str = "Hello! I'm Sara's AI assistant. I can help you with information about her portfolio, skills, and projects. How can I assist you today?";

/// On-disk catalog representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub fallback: String,
    #[serde(default = "default_welcome")]
    pub welcome: String,
    pub categories: Vec<IntentCategory>,
}

fn default_welcome() -> String {
    DEFAULT_WELCOME.to_string()
}

impl Catalog {
    /// The portfolio assistant's built-in categories, in priority order.
    pub fn portfolio() -> Self {
        let categories = vec![
            IntentCategory::new(
                "greetings",
                ["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
                [
                    "Hello! Welcome to Sara's portfolio assistant. How can I help you learn more about her work?",
                    "Hi there! I'm here to help you explore Sara's skills and experience. What would you like to know?",
                ],
            ),
            IntentCategory::new(
                "portfolio",
                ["portfolio", "work", "projects", "website", "examples", "showcase"],
                [
                    "You can view Sara's complete portfolio at my-portfolio-nine-olive-49.vercel.app. It showcases her React, Next.js, and Angular projects!",
                    "Sara's portfolio includes web applications, insurance platforms, and social media projects.",
                ],
            ),
            IntentCategory::new(
                "skills",
                ["skills", "technology", "tech", "programming", "react", "javascript", "next.js", "angular"],
                [
                    "Sara specializes in: React.js, Next.js 15, AngularJS, JavaScript, HTML5, CSS3, Material-UI, Tailwind CSS, Node.js, MongoDB, and RESTful APIs!",
                    "Her technical expertise includes modern React patterns, performance optimization, and responsive design.",
                ],
            ),
            IntentCategory::new(
                "experience",
                ["experience", "work experience", "job", "company", "ttn", "to the new"],
                [
                    "Sara has 3+ years at To The New Pvt Ltd, working on bhartiaxa.com insurance website, TV connection apps, and PWC India projects.",
                    "Currently at To The New, she's led Material-UI migrations, React upgrades, and complex API integrations.",
                ],
            ),
            IntentCategory::new(
                "education",
                ["education", "degree", "college", "university", "mca", "jamia"],
                ["Sara holds a Master's in Computer Application (MCA) from Jamia Millia Islamia with 9.19/10 CGPA, completed in 2022."],
            ),
            IntentCategory::new(
                "contact",
                ["contact", "email", "phone", "reach", "connect", "hire", "linkedin", "github"],
                ["You can reach Sara at:\n📧 sarahussain1398@gmail.com\n📱 8299076805\n💼 LinkedIn: linkedin.com/in/sara-hussain-07359b207\n🔗 GitHub: github.com/sarahussain556"],
            ),
            IntentCategory::new(
                "projects",
                ["buzz", "nameit", "application", "app", "social media", "project details"],
                ["Sara's key projects include:\n🔵 Buzzz Social Media App (React, Node.js, MongoDB)\n🔵 NameIt Domain Suggestion Tool (React)\n🔵 BhartiAXA Insurance Platform\nWould you like details about any specific project?"],
            ),
            IntentCategory::new(
                "help",
                ["help", "support", "assist", "guidance", "information"],
                ["I can help you learn about:\n• Sara's technical skills\n• Her portfolio projects\n• Contact information\n• Educational background\nWhat interests you most?"],
            ),
            IntentCategory::new(
                "thanks",
                ["thank", "thanks", "appreciate", "grateful"],
                [
                    "You're very welcome! Is there anything else you'd like to know about Sara's work?",
                    "Happy to help! Feel free to ask more questions.",
                ],
            ),
            IntentCategory::new(
                "about",
                ["about", "who are you", "what are you"],
                ["I'm Sara's portfolio assistant, designed to help visitors learn about her software engineering expertise and projects!"],
            ),
            IntentCategory::new(
                "goodbye",
                ["bye", "goodbye", "see you", "farewell"],
                ["Thanks for your interest in Sara's work! Don't forget to check out her portfolio. Have a great day!"],
            ),
        ];

        Self {
            fallback: DEFAULT_FALLBACK.to_string(),
            welcome: DEFAULT_WELCOME.to_string(),
            categories,
        }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        if catalog.welcome.trim().is_empty() {
            return Err(AppError::Config("Welcome message must not be blank".to_string()));
        }
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "Loaded intent catalog"
        );
        Ok(catalog)
    }

    /// Validate and freeze into an intent table.
    pub fn into_table(self) -> Result<IntentTable, AppError> {
        IntentTable::new(self.categories, self.fallback)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::portfolio()
    }
}
