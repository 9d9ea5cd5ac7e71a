// Demo event generator
//
// Not a live scrape: a fixed Sydney event set with dates computed relative
// to the invocation time, kept for demo and test parity.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use super::{EventSource, ScrapedEvent};

/// Fixed demo set of Sydney events.
pub struct DemoSource;

const SOURCE_TAG: &str = "demo";

fn days_from(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now + Duration::days(days)
}

/// Midnight UTC on a fixed day of the current year.
fn on_day(now: DateTime<Utc>, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), month, day, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

impl DemoSource {
    fn candidate(
        title: &str,
        description: &str,
        event_date: DateTime<Utc>,
        event_end_date: Option<DateTime<Utc>>,
        venue: &str,
        address: &str,
        image_url: &str,
        original_url: &str,
        ticket_url: &str,
        price: &str,
        category: &str,
    ) -> ScrapedEvent {
        ScrapedEvent {
            title: title.to_string(),
            description: description.to_string(),
            event_date,
            event_end_date,
            venue: venue.to_string(),
            address: Some(address.to_string()),
            image_url: Some(image_url.to_string()),
            original_url: original_url.to_string(),
            ticket_url: Some(ticket_url.to_string()),
            price: Some(price.to_string()),
            category: Some(category.to_string()),
            source: SOURCE_TAG.to_string(),
        }
    }
}

impl EventSource for DemoSource {
    fn tag(&self) -> &'static str {
        SOURCE_TAG
    }

    fn scrape(&self, now: DateTime<Utc>) -> Vec<ScrapedEvent> {
        vec![
            Self::candidate(
                "Vivid Sydney 2026",
                "Experience the magic of light, music and ideas at the world's largest \
                 festival of light, music and ideas. Vivid Sydney transforms the city with \
                 mesmerizing light installations, creative performances, and \
                 thought-provoking talks.",
                on_day(now, 5, 24),
                Some(on_day(now, 6, 15)),
                "Various Locations",
                "Circular Quay, Darling Harbour, and more",
                "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://www.vividsydney.com",
                "https://www.vividsydney.com/tickets",
                "Free (some events ticketed)",
                "Festival",
            ),
            Self::candidate(
                "Sydney Opera House: La Boheme",
                "Puccini's beloved opera tells the passionate story of love and loss in \
                 19th century Paris. Experience this timeless masterpiece performed by \
                 Opera Australia with world-class singers and orchestra.",
                days_from(now, 10),
                None,
                "Sydney Opera House",
                "Bennelong Point, Sydney NSW 2000",
                "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://www.sydneyoperahouse.com/events/la-boheme",
                "https://www.sydneyoperahouse.com/events/la-boheme",
                "From $79",
                "Opera",
            ),
            Self::candidate(
                "Sydney Food & Wine Fair",
                "Indulge in the finest food and wine from Australia's best producers. \
                 Sample premium wines, gourmet foods, and attend masterclasses with \
                 celebrity chefs. A must-visit for food lovers.",
                days_from(now, 15),
                Some(days_from(now, 17)),
                "International Convention Centre Sydney",
                "14 Darling Dr, Sydney NSW 2000",
                "https://images.pexels.com/photos/1267320/pexels-photo-1267320.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://sydneyfoodandwinefair.com.au",
                "https://sydneyfoodandwinefair.com.au/tickets",
                "From $45",
                "Food & Wine",
            ),
            Self::candidate(
                "Coastal Comedy Club",
                "Laugh out loud with Australia's top comedians in an intimate club \
                 setting. This week features rising stars and surprise guest appearances. \
                 Great food and drinks available.",
                days_from(now, 3),
                None,
                "The Comedy Store",
                "Entertainment Quarter, 122 Lang Rd, Moore Park NSW 2021",
                "https://images.pexels.com/photos/1047442/pexels-photo-1047442.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://www.comedystore.com.au",
                "https://www.comedystore.com.au/tickets",
                "$35",
                "Comedy",
            ),
            Self::candidate(
                "Bondi Beach Markets",
                "Browse unique handmade crafts, vintage clothing, artisan jewelry, and \
                 local art at Bondi's famous weekend markets. Enjoy live music, delicious \
                 street food, and stunning ocean views.",
                days_from(now, 5),
                None,
                "Bondi Beach Public School",
                "Campbell Parade, Bondi Beach NSW 2026",
                "https://images.pexels.com/photos/1309240/pexels-photo-1309240.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://bondimarkets.com.au",
                "https://bondimarkets.com.au",
                "Free entry",
                "Markets",
            ),
            Self::candidate(
                "Sydney Harbour Bridge Climb",
                "Scale the iconic Sydney Harbour Bridge for breathtaking 360-degree views \
                 of the city. Professional guides share fascinating stories about the \
                 bridge's history and construction.",
                days_from(now, 1),
                None,
                "Sydney Harbour Bridge",
                "3 Cumberland St, The Rocks NSW 2000",
                "https://images.pexels.com/photos/783682/pexels-photo-783682.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://www.bridgeclimb.com",
                "https://www.bridgeclimb.com/tickets",
                "From $268",
                "Adventure",
            ),
            Self::candidate(
                "Sydney Jazz Festival",
                "Three nights of world-class jazz featuring international and local \
                 artists. From smooth classics to contemporary fusion, experience the \
                 best of jazz in Sydney's premier venues.",
                days_from(now, 20),
                Some(days_from(now, 22)),
                "City Recital Hall",
                "2 Angel Pl, Sydney NSW 2000",
                "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://sydneyjazzfestival.com.au",
                "https://sydneyjazzfestival.com.au/tickets",
                "From $65",
                "Music",
            ),
            Self::candidate(
                "Art Gallery NSW: Modern Masters",
                "Explore an extraordinary collection of modern art featuring works by \
                 Picasso, Matisse, and Australian masters. This limited exhibition \
                 showcases rarely-seen pieces from private collections.",
                days_from(now, 7),
                Some(days_from(now, 90)),
                "Art Gallery of New South Wales",
                "Art Gallery Rd, Sydney NSW 2000",
                "https://images.pexels.com/photos/1839919/pexels-photo-1839919.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://www.artgallery.nsw.gov.au",
                "https://www.artgallery.nsw.gov.au/tickets",
                "$28",
                "Art",
            ),
            Self::candidate(
                "Luna Park Sydney Twilight Sessions",
                "Experience the magic of Luna Park after dark with unlimited rides, \
                 carnival games, and spectacular harbour views. Perfect for families and \
                 thrill-seekers alike.",
                days_from(now, 4),
                None,
                "Luna Park Sydney",
                "1 Olympic Dr, Milsons Point NSW 2061",
                "https://images.pexels.com/photos/1701214/pexels-photo-1701214.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://www.lunaparksydney.com",
                "https://www.lunaparksydney.com/tickets",
                "From $59",
                "Entertainment",
            ),
            Self::candidate(
                "Taronga Zoo Twilight Concert Series",
                "Enjoy live music with stunning harbour views at Taronga Zoo. Pack a \
                 picnic, explore the zoo after hours, and watch the sunset over Sydney \
                 while listening to top Australian artists.",
                days_from(now, 12),
                None,
                "Taronga Zoo",
                "Bradleys Head Rd, Mosman NSW 2088",
                "https://images.pexels.com/photos/1661179/pexels-photo-1661179.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://taronga.org.au/twilight",
                "https://taronga.org.au/twilight/tickets",
                "From $75",
                "Music",
            ),
            Self::candidate(
                "Sydney Marathon",
                "Run through Sydney's most iconic locations including the Harbour Bridge \
                 and Opera House. Join thousands of runners in this world-class marathon \
                 event with distances for all abilities.",
                days_from(now, 45),
                None,
                "Sydney CBD",
                "Starting at Milsons Point, Sydney NSW",
                "https://images.pexels.com/photos/2526878/pexels-photo-2526878.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://www.sydneymarathon.com",
                "https://www.sydneymarathon.com/register",
                "From $150",
                "Sports",
            ),
            Self::candidate(
                "Sculpture by the Sea",
                "Walk the stunning coastal path from Bondi to Tamarama and experience \
                 over 100 sculptures by artists from around the world. This free \
                 exhibition transforms the coastline into an outdoor gallery.",
                days_from(now, 30),
                Some(days_from(now, 44)),
                "Bondi to Tamarama Coastal Walk",
                "Bondi Beach, NSW 2026",
                "https://images.pexels.com/photos/1109354/pexels-photo-1109354.jpeg?auto=compress&cs=tinysrgb&w=1200",
                "https://sculpturebythesea.com",
                "https://sculpturebythesea.com",
                "Free",
                "Art",
            ),
        ]
    }
}
