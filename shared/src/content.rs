//! # Page Content
//!
//! Static copy for the landing page and the ordered list of feature cards.
//! Nothing here is ever mutated or fetched.

/// Product name shown in the navigation bar.
pub const BRAND_NAME: &str = "ChatWithYoutube";

pub const HERO_HEADING: &str = "Your AI YouTube Assistant";

pub const HERO_TAGLINE: &str = "Transform your YouTube experience with AI-powered features that help \
     you understand, navigate, and extract information from any video.";

pub const CTA_LABEL: &str = "Add to Chrome";

/// Browser-extension storefront opened by the call-to-action.
pub const STORE_URL: &str = "https://chrome.google.com/webstore";

pub const DEMO_PLACEHOLDER: &str = "Demo Video Coming Soon";

/// Glyph references used on the page. The web crate owns the actual SVG paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Youtube,
    MessageSquare,
    FastForward,
    Search,
    Clock,
    FileText,
    ChefHat,
    Chrome,
    Sun,
    Moon,
}

impl Glyph {
    /// Accessible label for the glyph.
    pub fn label(&self) -> &'static str {
        match self {
            Glyph::Youtube => "YouTube",
            Glyph::MessageSquare => "Chat",
            Glyph::FastForward => "Fast forward",
            Glyph::Search => "Search",
            Glyph::Clock => "Clock",
            Glyph::FileText => "Transcript",
            Glyph::ChefHat => "Chef hat",
            Glyph::Chrome => "Chrome",
            Glyph::Sun => "Light theme",
            Glyph::Moon => "Dark theme",
        }
    }
}

/// Accent color applied to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Red,
    Pink,
    Blue,
    Purple,
    Green,
    Orange,
    Yellow,
}

impl Accent {
    /// Utility class coloring the glyph stroke.
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Red => "text-red-500",
            Accent::Pink => "text-pink-500",
            Accent::Blue => "text-blue-500",
            Accent::Purple => "text-purple-500",
            Accent::Green => "text-green-500",
            Accent::Orange => "text-orange-500",
            Accent::Yellow => "text-yellow-500",
        }
    }
}

/// One card of the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub glyph: Glyph,
    pub accent: Accent,
    pub title: &'static str,
    pub description: &'static str,
}

/// The feature grid, in display order.
pub const FEATURES: [FeatureDescriptor; 6] = [
    FeatureDescriptor {
        glyph: Glyph::MessageSquare,
        accent: Accent::Pink,
        title: "Chat & Summarize",
        description: "Get instant summaries and chat about any YouTube video content",
    },
    FeatureDescriptor {
        glyph: Glyph::FastForward,
        accent: Accent::Blue,
        title: "Skip Ads",
        description: "Automatically skip through ad breaks seamlessly",
    },
    FeatureDescriptor {
        glyph: Glyph::Search,
        accent: Accent::Purple,
        title: "Visual Search",
        description: "Search for specific moments in videos with visual context",
    },
    FeatureDescriptor {
        glyph: Glyph::Clock,
        accent: Accent::Green,
        title: "Smart Timestamps",
        description: "Navigate videos with intelligent timestamp markers",
    },
    FeatureDescriptor {
        glyph: Glyph::FileText,
        accent: Accent::Orange,
        title: "Video Transcript",
        description: "Access complete video transcripts instantly",
    },
    FeatureDescriptor {
        glyph: Glyph::ChefHat,
        accent: Accent::Yellow,
        title: "Smart Extraction",
        description: "Get recipes from cooking videos or steps from tutorials",
    },
];
