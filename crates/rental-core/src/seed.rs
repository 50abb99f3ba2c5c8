//! # Seed Catalog
//!
//! The mock inventory the storefront starts with. Every listing belongs to
//! seller "2" (the demo seller account) and is pre-approved.

use crate::money::Money;
use crate::types::{FuelType, Transmission, Vehicle, VehicleCategory};

use FuelType::{Electric, Petrol};
use Transmission::{Automatic, Manual};
use VehicleCategory::{Bike, Car, Luxury};

/// Seller id that owns the seed listings.
pub const SEED_SELLER_ID: &str = "2";

const IMG: &str = "https://images.unsplash.com/photo-";
const IMG_PARAMS: &str = "?w=800&h=600&fit=crop";

/// One row of seed data, in the column order the listing table shows.
struct Row {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    model: &'static str,
    year: u16,
    category: VehicleCategory,
    fuel: FuelType,
    transmission: Transmission,
    seats: u8,
    /// day / week / month in whole dollars
    prices: (i64, i64, i64),
    location: &'static str,
    images: [&'static str; 2],
    features: &'static [&'static str],
    rating: f32,
    reviews: u32,
    description: &'static str,
    mileage: u32,
    engine: &'static str,
    color: &'static str,
}

impl Row {
    fn into_vehicle(self) -> Vehicle {
        Vehicle {
            id: self.id.to_string(),
            name: self.name.to_string(),
            brand: self.brand.to_string(),
            model: self.model.to_string(),
            year: self.year,
            category: self.category,
            fuel_type: self.fuel,
            transmission: self.transmission,
            seats: self.seats,
            price_per_day: Money::from_major(self.prices.0),
            price_per_week: Money::from_major(self.prices.1),
            price_per_month: Money::from_major(self.prices.2),
            location: self.location.to_string(),
            images: self
                .images
                .iter()
                .map(|photo| format!("{IMG}{photo}{IMG_PARAMS}"))
                .collect(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            rating: self.rating,
            reviews: self.reviews,
            available: true,
            seller_id: SEED_SELLER_ID.to_string(),
            description: self.description.to_string(),
            mileage: self.mileage,
            engine_size: self.engine.to_string(),
            color: self.color.to_string(),
            approved: true,
        }
    }
}

/// Returns the 20 seed listings in catalog order.
pub fn mock_vehicles() -> Vec<Vehicle> {
    rows().into_iter().map(Row::into_vehicle).collect()
}

fn rows() -> Vec<Row> {
    vec![
        Row {
            id: "1", name: "Toyota Camry 2023", brand: "Toyota", model: "Camry", year: 2023,
            category: Car, fuel: Petrol, transmission: Automatic, seats: 5,
            prices: (45, 280, 1100), location: "New York",
            images: ["1621007947382-bb3c3994e3fb", "1605559424843-9e4c228bf1c2"],
            features: &["AC", "GPS", "Bluetooth", "USB Charging", "Backup Camera"],
            rating: 4.5, reviews: 128,
            description: "Comfortable and reliable sedan perfect for city driving and long trips.",
            mileage: 28, engine: "2.5L", color: "Silver",
        },
        Row {
            id: "2", name: "BMW X5 2023", brand: "BMW", model: "X5", year: 2023,
            category: Luxury, fuel: Petrol, transmission: Automatic, seats: 7,
            prices: (120, 800, 3200), location: "Los Angeles",
            images: ["1555215695-3004980ad54e", "1606016159991-8b5d5c6c0e7b"],
            features: &["Leather Seats", "Premium Sound", "Panoramic Roof", "Heated Seats", "Navigation"],
            rating: 4.8, reviews: 85,
            description: "Luxury SUV with premium features and exceptional performance.",
            mileage: 22, engine: "3.0L", color: "Black",
        },
        Row {
            id: "3", name: "Honda Civic 2022", brand: "Honda", model: "Civic", year: 2022,
            category: Car, fuel: Petrol, transmission: Manual, seats: 5,
            prices: (35, 220, 850), location: "Chicago",
            images: ["1494905998402-395d579af36f", "1549317661-bd32c8ce0db2"],
            features: &["AC", "Bluetooth", "USB Charging", "Safety Package"],
            rating: 4.3, reviews: 95,
            description: "Efficient and sporty compact car ideal for daily commuting.",
            mileage: 32, engine: "2.0L", color: "Blue",
        },
        Row {
            id: "4", name: "Harley Davidson Street 750", brand: "Harley Davidson", model: "Street 750", year: 2023,
            category: Bike, fuel: Petrol, transmission: Manual, seats: 2,
            prices: (65, 400, 1500), location: "Miami",
            images: ["1558618666-fcd25c85cd64", "1609630875171-b1321377ee65"],
            features: &["ABS", "Digital Display", "LED Lights", "Comfortable Seat"],
            rating: 4.6, reviews: 42,
            description: "Iconic cruiser motorcycle perfect for weekend adventures.",
            mileage: 18, engine: "750cc", color: "Black",
        },
        Row {
            id: "5", name: "Tesla Model S 2024", brand: "Tesla", model: "Model S", year: 2024,
            category: Luxury, fuel: Electric, transmission: Automatic, seats: 5,
            prices: (150, 1000, 4000), location: "San Francisco",
            images: ["1560958089-b8a1929cea89", "1593941707882-a5bac6861d75"],
            features: &["Autopilot", "Premium Interior", "Supercharging", "Glass Roof", "Premium Audio"],
            rating: 4.9, reviews: 156,
            description: "Revolutionary electric luxury sedan with cutting-edge technology.",
            mileage: 405, engine: "Electric", color: "Pearl White",
        },
        Row {
            id: "6", name: "Mercedes-Benz C-Class 2023", brand: "Mercedes-Benz", model: "C-Class", year: 2023,
            category: Luxury, fuel: Petrol, transmission: Automatic, seats: 5,
            prices: (95, 650, 2600), location: "New York",
            images: ["1618843479313-40f8afb4b4d8", "1571019613454-1cb2f99b2d8b"],
            features: &["MBUX System", "LED Headlights", "Wireless Charging", "Premium Sound", "Ambient Lighting"],
            rating: 4.7, reviews: 89,
            description: "Elegant luxury sedan with sophisticated German engineering.",
            mileage: 25, engine: "2.0L Turbo", color: "Obsidian Black",
        },
        Row {
            id: "7", name: "Ford Mustang GT 2023", brand: "Ford", model: "Mustang GT", year: 2023,
            category: Car, fuel: Petrol, transmission: Manual, seats: 4,
            prices: (85, 550, 2200), location: "Las Vegas",
            images: ["1503376780353-7e6692767b70", "1525609004556-c46c7d6cf023"],
            features: &["V8 Engine", "Sport Suspension", "Performance Package", "Brembo Brakes", "Track Apps"],
            rating: 4.4, reviews: 73,
            description: "Iconic American muscle car with thrilling performance.",
            mileage: 16, engine: "5.0L V8", color: "Race Red",
        },
        Row {
            id: "8", name: "Yamaha R1 2023", brand: "Yamaha", model: "YZF-R1", year: 2023,
            category: Bike, fuel: Petrol, transmission: Manual, seats: 2,
            prices: (75, 480, 1800), location: "Los Angeles",
            images: ["1547036967-23d11aacaee0", "1568605117036-5fe5e7bab0b7"],
            features: &["Traction Control", "Quick Shifter", "Launch Control", "Slide Control", "Wheelie Control"],
            rating: 4.8, reviews: 34,
            description: "High-performance superbike for adrenaline seekers.",
            mileage: 14, engine: "998cc", color: "Team Yamaha Blue",
        },
        Row {
            id: "9", name: "Audi Q7 2023", brand: "Audi", model: "Q7", year: 2023,
            category: Luxury, fuel: Petrol, transmission: Automatic, seats: 7,
            prices: (110, 750, 3000), location: "Miami",
            images: ["1549399542-7e3f8b79c341", "1606664515524-ed2f786a0bd6"],
            features: &["Virtual Cockpit", "Matrix LED", "Air Suspension", "Bang & Olufsen", "Quattro AWD"],
            rating: 4.6, reviews: 67,
            description: "Premium SUV combining luxury, technology, and performance.",
            mileage: 20, engine: "3.0L TFSI", color: "Glacier White",
        },
        Row {
            id: "10", name: "Chevrolet Corvette 2023", brand: "Chevrolet", model: "Corvette", year: 2023,
            category: Luxury, fuel: Petrol, transmission: Automatic, seats: 2,
            prices: (180, 1200, 4800), location: "Miami",
            images: ["1552519507-da3b142c6e3d", "1584464491033-06628f3a6b7b"],
            features: &["Mid-Engine", "Performance Data Recorder", "Magnetic Ride Control", "Bose Audio", "Carbon Fiber"],
            rating: 4.9, reviews: 45,
            description: "America's supercar with mid-engine design and incredible performance.",
            mileage: 15, engine: "6.2L V8", color: "Torch Red",
        },
        Row {
            id: "11", name: "Kawasaki Ninja ZX-10R", brand: "Kawasaki", model: "Ninja ZX-10R", year: 2023,
            category: Bike, fuel: Petrol, transmission: Manual, seats: 2,
            prices: (80, 520, 2000), location: "Chicago",
            images: ["1609630875171-b1321377ee65", "1547036967-23d11aacaee0"],
            features: &["KTRC", "KLCM", "KQSS", "Ohlins Suspension", "Brembo Brakes"],
            rating: 4.7, reviews: 28,
            description: "Track-focused superbike with race-proven technology.",
            mileage: 13, engine: "998cc", color: "Lime Green",
        },
        Row {
            id: "12", name: "Range Rover Evoque 2023", brand: "Land Rover", model: "Range Rover Evoque", year: 2023,
            category: Luxury, fuel: Petrol, transmission: Automatic, seats: 5,
            prices: (105, 700, 2800), location: "San Francisco",
            images: ["1533473359331-0135ef1b58bf", "1544636331-e26879cd4d9b"],
            features: &["Terrain Response", "ClearSight", "Meridian Audio", "Pivi Pro", "All-Wheel Drive"],
            rating: 4.5, reviews: 52,
            description: "Compact luxury SUV with distinctive design and capability.",
            mileage: 21, engine: "2.0L Turbo", color: "Narvik Black",
        },
        Row {
            id: "13", name: "Porsche 911 Carrera 2023", brand: "Porsche", model: "911 Carrera", year: 2023,
            category: Luxury, fuel: Petrol, transmission: Automatic, seats: 4,
            prices: (200, 1350, 5400), location: "Los Angeles",
            images: ["1563720223185-11003d516935", "1560958089-b8a1929cea89"],
            features: &["PDK Transmission", "Sport Chrono", "PASM", "Porsche Communication", "Sport Exhaust"],
            rating: 4.9, reviews: 38,
            description: "Legendary sports car icon with timeless design and performance.",
            mileage: 18, engine: "3.0L Twin-Turbo", color: "Guards Red",
        },
        Row {
            id: "14", name: "Ducati Panigale V4", brand: "Ducati", model: "Panigale V4", year: 2023,
            category: Bike, fuel: Petrol, transmission: Manual, seats: 2,
            prices: (90, 600, 2300), location: "Las Vegas",
            images: ["1568605117036-5fe5e7bab0b7", "1558618666-fcd25c85cd64"],
            features: &["Desmodromic Valves", "Cornering ABS", "DTC EVO", "DWC EVO", "Öhlins Suspension"],
            rating: 4.8, reviews: 31,
            description: "Italian superbike masterpiece with V4 engine excellence.",
            mileage: 12, engine: "1103cc V4", color: "Ducati Red",
        },
        Row {
            id: "15", name: "Jeep Wrangler Unlimited 2023", brand: "Jeep", model: "Wrangler Unlimited", year: 2023,
            category: Car, fuel: Petrol, transmission: Manual, seats: 5,
            prices: (70, 450, 1800), location: "Denver",
            images: ["1502877338535-766e1452684a", "1533473359331-0135ef1b58bf"],
            features: &["4x4 Capability", "Removable Doors", "Fold-Down Windshield", "Rock Rails", "Skid Plates"],
            rating: 4.4, reviews: 92,
            description: "Ultimate off-road adventure vehicle with iconic design.",
            mileage: 18, engine: "3.6L V6", color: "Bright White",
        },
        Row {
            id: "16", name: "Lexus RX 350 2023", brand: "Lexus", model: "RX 350", year: 2023,
            category: Luxury, fuel: Petrol, transmission: Automatic, seats: 5,
            prices: (90, 600, 2400), location: "Seattle",
            images: ["1555215695-3004980ad54e", "1549399542-7e3f8b79c341"],
            features: &["Lexus Safety System", "Mark Levinson Audio", "Panoramic Roof", "Heated/Cooled Seats", "Wireless Charging"],
            rating: 4.6, reviews: 78,
            description: "Refined luxury SUV with exceptional comfort and reliability.",
            mileage: 23, engine: "3.5L V6", color: "Atomic Silver",
        },
        Row {
            id: "17", name: "Honda CBR1000RR-R", brand: "Honda", model: "CBR1000RR-R", year: 2023,
            category: Bike, fuel: Petrol, transmission: Manual, seats: 2,
            prices: (85, 550, 2100), location: "Austin",
            images: ["1609630875171-b1321377ee65", "1568605117036-5fe5e7bab0b7"],
            features: &["Honda Selectable Torque Control", "Wheelie Control", "Launch Control", "Öhlins Suspension", "Brembo Brakes"],
            rating: 4.7, reviews: 26,
            description: "Track-bred superbike with MotoGP-derived technology.",
            mileage: 13, engine: "999cc", color: "Grand Prix Red",
        },
        Row {
            id: "18", name: "Volkswagen Golf GTI 2023", brand: "Volkswagen", model: "Golf GTI", year: 2023,
            category: Car, fuel: Petrol, transmission: Manual, seats: 5,
            prices: (55, 350, 1400), location: "Portland",
            images: ["1549317661-bd32c8ce0db2", "1494905998402-395d579af36f"],
            features: &["Turbo Engine", "Sport Suspension", "Performance Brakes", "Digital Cockpit", "Plaid Seats"],
            rating: 4.5, reviews: 64,
            description: "Hot hatch legend with perfect balance of performance and practicality.",
            mileage: 24, engine: "2.0L Turbo", color: "Tornado Red",
        },
        Row {
            id: "19", name: "Cadillac Escalade 2023", brand: "Cadillac", model: "Escalade", year: 2023,
            category: Luxury, fuel: Petrol, transmission: Automatic, seats: 8,
            prices: (140, 950, 3800), location: "Dallas",
            images: ["1556742049-0cfed4f6a45d", "1606016159991-8b5d5c6c0e7b"],
            features: &["38-inch Curved OLED", "Super Cruise", "AKG Audio", "Magnetic Ride Control", "Night Vision"],
            rating: 4.7, reviews: 56,
            description: "Full-size luxury SUV with commanding presence and advanced technology.",
            mileage: 16, engine: "6.2L V8", color: "Shadow Metallic",
        },
        Row {
            id: "20", name: "Suzuki GSX-R1000R", brand: "Suzuki", model: "GSX-R1000R", year: 2023,
            category: Bike, fuel: Petrol, transmission: Manual, seats: 2,
            prices: (78, 500, 1900), location: "Phoenix",
            images: ["1547036967-23d11aacaee0", "1609630875171-b1321377ee65"],
            features: &["Motion Track Brake System", "Launch Control", "Suzuki Drive Mode Selector", "Showa Suspension", "Brembo Brakes"],
            rating: 4.6, reviews: 33,
            description: "Pure-bred racing machine with legendary GSX-R heritage.",
            mileage: 14, engine: "999cc", color: "Metallic Triton Blue",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique_and_ordered() {
        let vehicles = mock_vehicles();
        assert_eq!(vehicles.len(), 20);

        let ids: HashSet<_> = vehicles.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(vehicles[0].id, "1");
        assert_eq!(vehicles[19].id, "20");
    }

    #[test]
    fn test_seed_first_listing() {
        let camry = &mock_vehicles()[0];
        assert_eq!(camry.price_per_day, Money::from_major(45));
        assert_eq!(camry.location, "New York");
        assert_eq!(
            camry.images[0],
            "https://images.unsplash.com/photo-1621007947382-bb3c3994e3fb?w=800&h=600&fit=crop"
        );
        assert!(camry.approved);
        assert_eq!(camry.seller_id, SEED_SELLER_ID);
    }
}
