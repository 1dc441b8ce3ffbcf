//! Static reference content shown to residents.
//!
//! These tables are configuration, not records: they are compiled in and
//! never written to disk, with the exception of the weekly menu which is
//! seeded from [`DEFAULT_WEEKLY_MENU`] and can later be edited.

use chrono::Weekday;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::DayMenu;

pub const HOSTEL_RULES: &[&str] = &[
    "Curfew time is 9:00 PM on weekdays and 10:00 PM on weekends",
    "Maintain silence after 10:00 PM",
    "No outside guests allowed in rooms",
    "Keep your room and common areas clean",
    "Switch off lights and fans when leaving the room",
    "Mess timings: Breakfast (7-9 AM), Lunch (12-2 PM), Dinner (7-9 PM)",
    "Dress modestly in common areas",
    "Use water responsibly",
    "Keep valuables secure - the hostel is not responsible for lost items",
    "Be respectful and kind to your hostel mates",
];

/// (service, phone number)
pub const EMERGENCY_CONTACTS: &[(&str, &str)] = &[
    ("Hostel Warden", "0300-1234567"),
    ("Security Guard", "0300-7654321"),
    ("Medical Emergency", "0300-9876543"),
    ("Fire Emergency", "115"),
    ("Police", "15"),
    ("Campus Clinic", "0300-1112223"),
    ("Maintenance", "0300-3334445"),
];

pub const MOTIVATIONAL_QUOTES: &[&str] = &[
    "You are stronger than you think! Keep pushing forward!",
    "Believe in yourself and all that you are. You're capable of amazing things!",
    "Every day is a new opportunity to be better than yesterday!",
    "You are enough, just as you are. Keep shining!",
    "Difficult roads often lead to beautiful destinations!",
    "Your potential is endless. Keep going!",
    "She believed she could, so she did!",
    "Strong women lift each other up!",
    "You are the author of your own story. Make it inspiring!",
    "Focus on your goals, not your fear!",
    "Be fearless in the pursuit of what sets your soul on fire!",
    "Empower yourself! You have the power to change your life!",
    "Education is the most powerful weapon you can use to change the world!",
    "You are precious, unique, and irreplaceable!",
];

pub const HEALTH_STUDY_TIPS: &[&str] = &[
    "Drink at least 8 glasses of water daily to stay hydrated!",
    "Eat plenty of fruits and vegetables for better concentration!",
    "Get 7-8 hours of sleep for optimal brain function!",
    "Exercise for 30 minutes daily - even a walk helps!",
    "Study in 25-minute focused sessions (Pomodoro Technique)!",
    "Practice meditation or deep breathing to reduce stress!",
    "Make a to-do list every morning to stay organized!",
    "Form study groups with friends for better understanding!",
    "Take breaks from screens to protect your eyes!",
    "Never skip breakfast - it's fuel for your brain!",
    "Read for 20 minutes before bed to improve sleep quality!",
    "Get some sunlight every day for Vitamin D!",
    "Practice active recall instead of just re-reading notes!",
    "Take care of your mental health - talk to someone if stressed!",
];

/// (weekday, breakfast, lunch, dinner)
pub const DEFAULT_WEEKLY_MENU: &[(Weekday, &str, &str, &str)] = &[
    (
        Weekday::Mon,
        "Paratha, Yogurt, Tea",
        "Rice, Daal, Chicken Curry, Salad",
        "Roti, Mixed Vegetables, Raita",
    ),
    (
        Weekday::Tue,
        "Halwa Puri, Chanay, Tea",
        "Biryani, Raita, Salad",
        "Roti, Daal Mash, Fried Fish",
    ),
    (
        Weekday::Wed,
        "Omelet, Bread, Tea",
        "Rice, Daal, Vegetable Qorma, Salad",
        "Roti, Palak Gosht, Raita",
    ),
    (
        Weekday::Thu,
        "Paratha, Fried Egg, Tea",
        "Pulao, Chicken Karahi, Salad",
        "Roti, Mixed Daal, Potato Curry",
    ),
    (
        Weekday::Fri,
        "Nihari, Naan, Tea",
        "Rice, Daal, Beef Qeema, Salad",
        "Roti, Chicken Jalfrezi, Raita",
    ),
    (
        Weekday::Sat,
        "Aloo Paratha, Yogurt, Tea",
        "Fried Rice, Manchurian, Salad",
        "Pizza/Pasta Night",
    ),
    (
        Weekday::Sun,
        "Pancakes, Honey, Tea",
        "Chicken Biryani, Raita, Salad",
        "Roti, Daal, Mixed Vegetables",
    ),
];

/// Default meals for `day`.
pub fn default_menu_for(day: Weekday) -> DayMenu {
    DEFAULT_WEEKLY_MENU
        .iter()
        .find(|(d, ..)| *d == day)
        .map(|(_, b, l, d)| DayMenu::new(b, l, d))
        .unwrap_or_else(|| DayMenu::new("-", "-", "-"))
}

pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_QUOTES.choose(rng).copied().unwrap_or_default()
}

pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    HEALTH_STUDY_TIPS.choose(rng).copied().unwrap_or_default()
}
