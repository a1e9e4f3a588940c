//! The fixed icon catalog.
//!
//! Application records reference icons by name. The catalog is closed:
//! names that do not match an entry resolve to [`Icon::Box`], so icon
//! resolution is a total function and never fails at render time. Lookup
//! is exact-match; `"mail"` is not `"Mail"`.

/// Well-known icon identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    // Generic container; also the fallback for unknown names.
    Box,
    // Communication
    Mail,
    MessageSquare,
    Phone,
    // People and organisation
    Users,
    User,
    Briefcase,
    Building,
    // Documents and knowledge
    FileText,
    Folder,
    Book,
    Clipboard,
    // Time
    Calendar,
    Clock,
    // Data and commerce
    BarChart3,
    Database,
    ShoppingCart,
    CreditCard,
    Truck,
    // Infrastructure
    Globe,
    Settings,
    Shield,
    Server,
    Map,
}

impl Icon {
    /// The fallback entry for names outside the catalog.
    pub const DEFAULT: Icon = Icon::Box;

    /// Resolve an icon name to a catalog entry.
    ///
    /// Total over arbitrary strings; unknown names yield [`Icon::DEFAULT`].
    pub fn from_name(name: &str) -> Icon {
        match name {
            "Box" => Icon::Box,
            "Mail" => Icon::Mail,
            "MessageSquare" => Icon::MessageSquare,
            "Phone" => Icon::Phone,
            "Users" => Icon::Users,
            "User" => Icon::User,
            "Briefcase" => Icon::Briefcase,
            "Building" => Icon::Building,
            "FileText" => Icon::FileText,
            "Folder" => Icon::Folder,
            "Book" => Icon::Book,
            "Clipboard" => Icon::Clipboard,
            "Calendar" => Icon::Calendar,
            "Clock" => Icon::Clock,
            "BarChart3" => Icon::BarChart3,
            "Database" => Icon::Database,
            "ShoppingCart" => Icon::ShoppingCart,
            "CreditCard" => Icon::CreditCard,
            "Truck" => Icon::Truck,
            "Globe" => Icon::Globe,
            "Settings" => Icon::Settings,
            "Shield" => Icon::Shield,
            "Server" => Icon::Server,
            "Map" => Icon::Map,
            _ => Icon::DEFAULT,
        }
    }

    /// A single-width glyph for terminal rendering.
    pub fn glyph(self) -> char {
        match self {
            Icon::Box => '▣',
            Icon::Mail => '✉',
            Icon::MessageSquare => '🗨',
            Icon::Phone => '☎',
            Icon::Users => '👥',
            Icon::User => '👤',
            Icon::Briefcase => '💼',
            Icon::Building => '🏢',
            Icon::FileText => '🗎',
            Icon::Folder => '🗀',
            Icon::Book => '📖',
            Icon::Clipboard => '🗐',
            Icon::Calendar => '📅',
            Icon::Clock => '🕒',
            Icon::BarChart3 => '📊',
            Icon::Database => '🛢',
            Icon::ShoppingCart => '🛒',
            Icon::CreditCard => '💳',
            Icon::Truck => '🚚',
            Icon::Globe => '🌐',
            Icon::Settings => '⚙',
            Icon::Shield => '🛡',
            Icon::Server => '🖥',
            Icon::Map => '🗺',
        }
    }
}
