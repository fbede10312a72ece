//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuAArrowDown as FontDecrease, LuAArrowUp as FontIncrease, LuArrowRight as ArrowRight,
        LuBookOpen as Discover, LuCheck as Check,
        LuChevronDown as ChevronDown, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCircleHelp as Help, LuClock as Clock,
        LuCreditCard as CreditCard, LuCrown as Premium, LuFileText as Books,
        LuFolderOpen as Collections, LuHeart as Heart, LuHeart as HeartFill,
        LuHighlighter as Highlight, LuLibrary as Library, LuList as Contents, LuLock as Lock,
        LuLogOut as Logout, LuMail as Mail, LuMenu as Menu, LuMoon as Moon,
        LuPanelLeft as Sidebar, LuSearch as Search, LuSettings as Settings,
        LuShieldCheck as Shield, LuStar as Star, LuSun as Sun, LuTrash2 as Trash,
        LuTrendingUp as Trending, LuTrophy as Trophy, LuType as Align, LuUser as User,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsBookHalf as Discover,
        BsBoxArrowRight as Logout, BsCheckLg as Check, BsChevronDown as ChevronDown,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsClock as Clock,
        BsCollection as Library, BsCreditCard as CreditCard, BsDashLg as FontDecrease,
        BsEnvelope as Mail, BsFileEarmarkText as Books, BsFolder2Open as Collections,
        BsGear as Settings, BsGem as Premium, BsGraphUpArrow as Trending, BsHeart as Heart,
        BsHeartFill as HeartFill, BsHighlighter as Highlight, BsJustify as Align,
        BsLayoutSidebar as Sidebar, BsList as Menu, BsListUl as Contents, BsLockFill as Lock,
        BsMoonFill as Moon, BsPerson as User, BsPlusLg as FontIncrease,
        BsQuestionCircle as Help, BsSearch as Search, BsShieldCheck as Shield,
        BsStarFill as Star, BsSunFill as Sun, BsTrash as Trash, BsTrophy as Trophy,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Navigation
themed_icon!(DISCOVER, Discover);
themed_icon!(BOOKS, Books);
themed_icon!(COLLECTIONS, Collections);
themed_icon!(LIBRARY, Library);
themed_icon!(PREMIUM, Premium);
themed_icon!(MENU, Menu);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);

// Account
themed_icon!(USER, User);
themed_icon!(SETTINGS, Settings);
themed_icon!(CREDIT_CARD, CreditCard);
themed_icon!(HELP, Help);
themed_icon!(LOGOUT, Logout);
themed_icon!(MAIL, Mail);
themed_icon!(LOCK, Lock);
themed_icon!(SHIELD, Shield);

// Theme
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);

// Books and progress
themed_icon!(HEART, Heart);
themed_icon!(HEART_FILL, HeartFill);
themed_icon!(STAR, Star);
themed_icon!(CLOCK, Clock);
themed_icon!(CHECK, Check);
themed_icon!(TROPHY, Trophy);
themed_icon!(TRENDING, Trending);

// Reader
themed_icon!(HIGHLIGHT, Highlight);
themed_icon!(FONT_INCREASE, FontIncrease);
themed_icon!(FONT_DECREASE, FontDecrease);
themed_icon!(ALIGN, Align);
themed_icon!(SIDEBAR, Sidebar);
themed_icon!(CONTENTS, Contents);
themed_icon!(TRASH, Trash);
