/// Static page content for the guest house
///
/// Everything here is inert configuration data: the rendering layer and
/// the sliders consume it, but nothing mutates it. Photo locators are
/// paths under assets/ relative to the working directory.

/// A room on offer, with its photo set for the slider
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: &'static str,
    pub description: &'static str,
    pub capacity: &'static str,
    pub amenities: &'static [&'static str],
    pub photos: &'static [&'static str],
}

/// One row of the price list
#[derive(Debug, Clone, PartialEq)]
pub struct PriceItem {
    pub period: &'static str,
    pub price: &'static str,
    pub note: Option<&'static str>,
}

/// An extra paid or free service
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub name: &'static str,
    pub price: &'static str,
}

/// A guest review
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: &'static str,
    pub stay: &'static str,
    pub text: &'static str,
}

/// One card of the about section
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room {
            name: "Стандартный номер",
            description: "Уютный номер с двуспальной кроватью, идеально подходит для пары",
            capacity: "2 человека",
            amenities: &["Wi-Fi", "Телевизор", "Холодильник", "Кондиционер"],
            photos: &[
                "assets/rooms/standard-1.jpg",
                "assets/rooms/standard-2.jpg",
                "assets/rooms/standard-3.jpg",
            ],
        },
        Room {
            name: "Семейный номер",
            description: "Просторный номер с двумя комнатами для всей семьи",
            capacity: "4-5 человек",
            amenities: &[
                "Wi-Fi",
                "Телевизор",
                "Холодильник",
                "Кондиционер",
                "Балкон",
                "Кухонный уголок",
            ],
            photos: &[
                "assets/rooms/family-1.jpg",
                "assets/rooms/family-2.jpg",
                "assets/rooms/family-3.jpg",
                "assets/rooms/family-4.jpg",
            ],
        },
        Room {
            name: "Комфорт номер",
            description: "Номер повышенной комфортности с большой кроватью",
            capacity: "2-3 человека",
            amenities: &[
                "Wi-Fi",
                "Телевизор",
                "Холодильник",
                "Кондиционер",
                "Балкон",
                "Джакузи",
            ],
            photos: &["assets/rooms/comfort-1.jpg", "assets/rooms/comfort-2.jpg"],
        },
    ]
}

pub fn prices() -> Vec<PriceItem> {
    vec![
        PriceItem {
            period: "Летний сезон (июнь-август)",
            price: "3000-4500 руб/сутки",
            note: Some("в зависимости от номера"),
        },
        PriceItem {
            period: "Межсезонье (май, сентябрь)",
            price: "2500-3500 руб/сутки",
            note: Some("в зависимости от номера"),
        },
        PriceItem {
            period: "Низкий сезон (октябрь-апрель)",
            price: "2000-3000 руб/сутки",
            note: Some("в зависимости от номера"),
        },
        PriceItem {
            period: "Новогодние праздники",
            price: "5000-6000 руб/сутки",
            note: Some("минимум 3 дня"),
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service { name: "Трансфер из аэропорта", price: "1500 руб" },
        Service { name: "Баня/сауна", price: "2000 руб/2 часа" },
        Service { name: "Мангал и беседка", price: "500 руб/день" },
        Service { name: "Детская площадка", price: "Бесплатно" },
        Service { name: "Парковка", price: "Бесплатно" },
        Service { name: "Организация экскурсий", price: "От 1000 руб" },
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            author: "Марина и Олег",
            stay: "июль 2025",
            text: "Отдыхали семьёй две недели. Чисто, тихо, хозяева очень \
                   внимательные. Детям понравилась площадка во дворе.",
        },
        Review {
            author: "Алексей",
            stay: "сентябрь 2025",
            text: "Отличное соотношение цены и качества. Баня — отдельное \
                   удовольствие после прогулок.",
        },
        Review {
            author: "Семья Ковалёвых",
            stay: "январь 2026",
            text: "Встречали Новый год в семейном номере. Всё организовано \
                   замечательно, обязательно вернёмся летом.",
        },
    ]
}

pub fn highlights() -> Vec<Highlight> {
    vec![
        Highlight {
            title: "Уютная атмосфера",
            text: "Домашний комфорт и теплый прием ждут каждого гостя",
        },
        Highlight {
            title: "Природа вокруг",
            text: "Живописное расположение в окружении зелени и свежего воздуха",
        },
        Highlight {
            title: "Для всей семьи",
            text: "Идеальное место для семейного отдыха с детьми",
        },
    ]
}
