//! Centralized style constants for consistent theming across the widget

// Background colors with dark mode support
pub const CONTAINER_BG: &str = "bg-gray-50 dark:bg-gray-900";
pub const CARD_BG: &str = "bg-white dark:bg-gray-800";

// Text colors with dark mode support
pub const PRIMARY_TEXT: &str = "text-gray-900 dark:text-gray-100";
pub const TERTIARY_TEXT: &str = "text-gray-600 dark:text-gray-400";
pub const MUTED_TEXT: &str = "text-gray-500 dark:text-gray-400";

// Border colors with dark mode support
pub const PRIMARY_BORDER: &str = "border-gray-200 dark:border-gray-700";

// Message bubbles
pub const USER_BUBBLE_COLORS: &str = "bg-blue-500 text-white ml-auto";
pub const ASSISTANT_BUBBLE_COLORS: &str = "bg-gray-100 text-gray-700 dark:bg-gray-700 dark:text-gray-200";
pub const USER_AVATAR_BG: &str = "bg-blue-500";
pub const ASSISTANT_AVATAR_BG: &str = "bg-gray-400";
pub const AVATAR: &str = "w-8 h-8 rounded-full flex items-center justify-center text-white";

// Flight cards (emitted as raw class strings inside rendered replies)
pub const FLIGHT_LIST: &str = "space-y-4";
pub const FLIGHT_CARD: &str = "rounded-lg shadow-md bg-white border border-blue-100 p-4";
pub const FLIGHT_TITLE: &str = "font-bold text-lg";
pub const FLIGHT_BADGE: &str = "ml-2 text-xs px-2 py-1 bg-blue-50 text-blue-700 rounded";
pub const FLIGHT_DURATION: &str = "text-sm text-gray-700 mb-1";
pub const FLIGHT_SEGMENTS: &str = "list-disc list-inside text-gray-600 text-sm mt-1";
pub const FLIGHT_PRICE: &str = "text-right text-blue-700 font-semibold text-base";

// Button styles
pub const SECONDARY_BUTTON: &str = "px-4 py-2 bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-700 dark:text-gray-300 rounded-md transition-colors";

// Input styles
pub const INPUT_COLORS: &str =
    "border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200";

// Common layout patterns
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_COL_GAP_4: &str = "flex flex-col gap-4";
pub const FLEX_CENTER: &str = "flex items-center";
pub const FLEX_CENTER_GAP_2: &str = "flex items-center gap-2";
pub const FLEX_BETWEEN: &str = "flex justify-between items-center";

// Common spacing
pub const STANDARD_PADDING: &str = "p-4";
pub const HEADER_PADDING: &str = "px-4 py-3";

// Rounded corners
pub const ROUNDED_STANDARD: &str = "rounded-lg";

// Transitions
pub const TRANSITION_COLORS: &str = "transition-colors duration-200";

// Utility function to combine multiple style constants
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}
