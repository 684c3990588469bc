//! Customer testimonials shown on the home page.
//!
//! Reviews are copied by hand from the studio's public Google profile and
//! translated, so each locale carries its own list and its own link back to
//! the review page. Ids match across locales.

use crate::types::Locale;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// Star rating, 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(stars: u8) -> Result<Self, ReviewError> {
        if (1..=5).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(ReviewError::RatingOutOfRange(stars))
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

/// Where a review was published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewSource {
    Google,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: Rating,
    pub text: String,
    pub source: ReviewSource,
    /// Relative date as shown by the source, e.g. "1 month ago"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Services the customer tagged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

struct ReviewRecord {
    id: &'static str,
    author: &'static str,
    rating: u8,
    date: Option<&'static str>,
    service: Option<&'static str>,
    text: &'static str,
}

impl ReviewRecord {
    fn to_review(&self) -> Result<Review, ReviewError> {
        Ok(Review {
            id: self.id.to_string(),
            author: self.author.to_string(),
            rating: Rating::new(self.rating)?,
            text: self.text.to_string(),
            source: ReviewSource::Google,
            date: self.date.map(str::to_string),
            service: self.service.map(str::to_string),
        })
    }
}

fn records(locale: Locale) -> &'static [ReviewRecord] {
    match locale {
        Locale::Es => REVIEWS_ES,
        Locale::En => REVIEWS_EN,
    }
}

fn to_reviews(records: &[ReviewRecord]) -> Result<Vec<Review>, ReviewError> {
    records.iter().map(ReviewRecord::to_review).collect()
}

/// All reviews for `locale`, newest first.
///
/// Fails on the first record with an invalid rating.
pub fn reviews(locale: Locale) -> Result<Vec<Review>, ReviewError> {
    to_reviews(records(locale))
}

/// Link to the public review page, localized.
pub fn reviews_url(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => REVIEWS_URL_ES,
        Locale::En => REVIEWS_URL_EN,
    }
}

/// Mean star rating, or `None` for an empty list.
pub fn average_rating(reviews: &[Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| r.rating.stars() as u32).sum();
    Some(total as f32 / reviews.len() as f32)
}

// ============================================================================
// Review data
// ============================================================================

const REVIEWS_URL_ES: &str =
    "https://www.google.com/search?sa=X&sca_esv=fc9cc7141bd3a5ec&sxsrf=ANbL-n7uGmEvlxmFbwFTgPBY7xnZ-gI8Gw:1769680290464&q=Vigarartattoo+Studio+Rese%C3%B1as&rflfq=1&num=20&stick=H4sIAAAAAAAAAONgkxIxNDAzNDezNLK0MDYxMTAxAbLMNzAyvmKUDctMTyxKLCpJLCnJz1cILilNycxXCEotTj28MbF4ESt-eQCTkwZBWwAAAA&rldimm=10617692983440449297&tbm=lcl&hl=es-DE&ved=2ahUKEwie0dDovLCSAxVy_7sIHVH8MSEQ9fQKegQIVBAG&biw=1920&bih=911&dpr=1&aic=0#lkt=LocalPoiReviews";

const REVIEWS_ES: &[ReviewRecord] = &[
    ReviewRecord {
        id: "g_001",
        author: "Claudia Pm",
        rating: 5,
        date: Some("hace 7 meses"),
        service: Some("Tatuajes a color"),
        text: "Rocío aparte de ser una gran profesional, es una chica super simpática. Este es ya mi tercer tatuaje con ella ☺️",
    },
    ReviewRecord {
        id: "g_002",
        author: "Yolanda Fernández Eslava",
        rating: 5,
        date: Some("hace 1 mes"),
        service: Some("Tatuajes a color y Tatuajes con líneas finas"),
        text: "Los cuatro mejores tatuajes de mi vida, por como estan hechos y lo que representan. Dos de ellos de mi perro del alma. Lo ha hecho tan igual a el que es como si lo llevara conmigo siempre. Una amiga de fuera al verlos va a venir a tatuarse su perro con ella jeje",
    },
    ReviewRecord {
        id: "g_003",
        author: "Paco Cobos",
        rating: 5,
        date: Some("hace 1 mes"),
        service: None,
        text: "Empecé con ella por casualidad y ahora no cambio a Rocio por nada del mundo. Es la mejor tatuadora que puedes encontrar en Malaga y en cualquier sitio. Su trabajo es espectacular en todo lo que hace, profesional como pocas. Sus precios no los vas a encontrar en ningun otro estudio. Y si trato no lo va a mejorar nadie. Simpática, divertida, buena gente. Cualquier duda que tengas te atiende siempre. Es la mejor 👏🏼👏🏼",
    },
    ReviewRecord {
        id: "g_004",
        author: "Marivi Collante",
        rating: 5,
        date: Some("hace 1 mes"),
        service: None,
        text: "Muy profesional, con un trato amigable y mucha paciencia. Como tatuadora de linea fina, de lo mejorcito. No es el primer tatuaje que me hago con esta artistaza y tampoco será el último. Sin duda volveré..",
    },
    ReviewRecord {
        id: "g_005",
        author: "Lorena Herran Navarro",
        rating: 5,
        date: Some("hace 1 mes"),
        service: None,
        text: "La chica es super simpática me sentí como en casa en todo instante. es una gran profesional y salí super contenta tanto con el trato como mi tattoo 🥰",
    },
    ReviewRecord {
        id: "g_006",
        author: "Paula Ariza",
        rating: 5,
        date: Some("hace 1 mes"),
        service: None,
        text: "Excelente como trabaja y lo simpática que es. Mi primera vez con ella pero se que no la última. Muchas gracias por poner tanto amor en tus trabajos 😊",
    },
];
const REVIEWS_URL_EN: &str =
    "https://www.google.com/search?sa=X&sca_esv=fc9cc7141bd3a5ec&sxsrf=ANbL-n7uGmEvlxmFbwFTgPBY7xnZ-gI8Gw:1769680290464&q=Vigarartattoo+Studio+Rese%C3%B1as&rflfq=1&num=20&stick=H4sIAAAAAAAAAONgkxIxNDAzNDezNLK0MDYxMTAxAbLMNzAyvmKUDctMTyxKLCpJLCnJz1cILilNycxXCEotTj28MbF4ESt-eQCTkwZBWwAAAA&rldimm=10617692983440449297&tbm=lcl&hl=es-DE&ved=2ahUKEwie0dDovLCSAxVy_7sIHVH8MSEQ9fQKegQIVBAG&biw=1920&bih=911&dpr=1&aic=0#lkt=LocalPoiReviews";

const REVIEWS_EN: &[ReviewRecord] = &[
    ReviewRecord {
        id: "g_001",
        author: "Claudia Pm",
        rating: 5,
        date: Some("7 months ago"),
        service: Some("Color tattoos"),
        text: "Rocío is not only a great professional, she’s also super friendly. This is already my third tattoo with her ☺️",
    },
    ReviewRecord {
        id: "g_002",
        author: "Yolanda Fernández Eslava",
        rating: 5,
        date: Some("1 month ago"),
        service: Some("Color tattoos and fine line tattoos"),
        text: "The four best tattoos of my life, for how well they’re done and what they represent. Two of them are of my soul-dog. She captured him so perfectly that it feels like I carry him with me always. A friend from abroad saw them and is going to come to get her dog tattooed by her too, haha.",
    },
    ReviewRecord {
        id: "g_003",
        author: "Paco Cobos",
        rating: 5,
        date: Some("1 month ago"),
        service: None,
        text: "I started with her by chance and now I wouldn’t change Rocío for anyone. She’s the best tattoo artist you can find in Málaga and anywhere else. Her work is spectacular in everything she does—professional like very few. You won’t find her prices in any other studio. And no one can beat her customer care: friendly, fun, and genuinely kind. Any question you have, she always helps. She’s the best 👏🏼👏🏼",
    },
    ReviewRecord {
        id: "g_004",
        author: "Marivi Collante",
        rating: 5,
        date: Some("1 month ago"),
        service: None,
        text: "Very professional, friendly, and incredibly patient. For fine line tattoos, she’s among the best. This isn’t my first tattoo with this amazing artist and it won’t be the last. I’ll definitely be back.",
    },
    ReviewRecord {
        id: "g_005",
        author: "Lorena Herran Navarro",
        rating: 5,
        date: Some("1 month ago"),
        service: None,
        text: "She’s super friendly—I felt at home the whole time. She’s a great professional and I left really happy with both the experience and my tattoo 🥰",
    },
    ReviewRecord {
        id: "g_006",
        author: "Paula Ariza",
        rating: 5,
        date: Some("1 month ago"),
        service: None,
        text: "Excellent work and such a nice person. My first time with her, but definitely not the last. Thank you so much for putting so much love into your work 😊",
    },
];
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_one_to_five() {
        for stars in 1..=5 {
            assert_eq!(Rating::new(stars).unwrap().stars(), stars);
        }
    }

    #[test]
    fn rating_rejects_out_of_range() {
        assert_eq!(Rating::new(0), Err(ReviewError::RatingOutOfRange(0)));
        assert_eq!(Rating::new(6), Err(ReviewError::RatingOutOfRange(6)));
    }

    #[test]
    fn every_record_is_valid() {
        for locale in [Locale::Es, Locale::En] {
            assert_eq!(reviews(locale).unwrap().len(), records(locale).len());
        }
    }

    #[test]
    fn bad_rating_in_data_is_an_error() {
        let records = [
            ReviewRecord {
                id: "g_001",
                author: "A",
                rating: 5,
                date: None,
                service: None,
                text: "ok",
            },
            ReviewRecord {
                id: "g_002",
                author: "B",
                rating: 7,
                date: None,
                service: None,
                text: "typo",
            },
        ];
        assert_eq!(
            to_reviews(&records),
            Err(ReviewError::RatingOutOfRange(7))
        );
    }

    #[test]
    fn locales_share_ids_and_authors() {
        let es = reviews(Locale::Es).unwrap();
        let en = reviews(Locale::En).unwrap();
        assert_eq!(es.len(), en.len());
        for (a, b) in es.iter().zip(&en) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.author, b.author);
            assert_eq!(a.rating, b.rating);
        }
    }

    #[test]
    fn texts_are_translated() {
        let es = reviews(Locale::Es).unwrap();
        let en = reviews(Locale::En).unwrap();
        assert_eq!(es[0].date.as_deref(), Some("hace 7 meses"));
        assert_eq!(en[0].date.as_deref(), Some("7 months ago"));
        assert_ne!(es[0].text, en[0].text);
    }

    #[test]
    fn average_of_shipped_reviews_is_five() {
        assert_eq!(average_rating(&reviews(Locale::En).unwrap()), Some(5.0));
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn urls_point_to_google() {
        assert!(reviews_url(Locale::Es).starts_with("https://www.google.com/"));
        assert!(reviews_url(Locale::En).starts_with("https://www.google.com/"));
    }

    #[test]
    fn optional_fields_are_skipped_in_json() {
        let review = reviews(Locale::En)
            .unwrap()
            .into_iter()
            .find(|r| r.service.is_none())
            .unwrap();
        let json = serde_json::to_value(&review).unwrap();
        assert!(json.get("service").is_none());
        assert_eq!(json["rating"], 5);
        assert_eq!(json["source"], "Google");
    }
}
