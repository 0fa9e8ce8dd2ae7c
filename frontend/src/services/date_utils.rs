use chrono::{Local, Timelike};

/// Greeting for the home page header based on the local hour
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=10 => "Chào buổi sáng",
        11..=13 => "Chào buổi trưa",
        14..=17 => "Chào buổi chiều",
        _ => "Chào buổi tối",
    }
}

pub fn current_greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

/// Suggested meal section title for the home page
pub fn meal_suggestion_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=10 => "Bữa sáng gợi ý",
        11..=13 => "Bữa trưa gợi ý",
        _ => "Món ngon hôm nay",
    }
}

pub fn current_meal_suggestion() -> &'static str {
    meal_suggestion_for_hour(Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(4), "Chào buổi tối");
        assert_eq!(greeting_for_hour(5), "Chào buổi sáng");
        assert_eq!(greeting_for_hour(12), "Chào buổi trưa");
        assert_eq!(greeting_for_hour(17), "Chào buổi chiều");
        assert_eq!(greeting_for_hour(23), "Chào buổi tối");
    }

    #[test]
    fn test_meal_suggestion() {
        assert_eq!(meal_suggestion_for_hour(7), "Bữa sáng gợi ý");
        assert_eq!(meal_suggestion_for_hour(12), "Bữa trưa gợi ý");
        assert_eq!(meal_suggestion_for_hour(20), "Món ngon hôm nay");
    }
}
