use super::{Asset, AssetCategory, AssetDetails, AssetStatus, Coordinates};

struct SeedRow {
    id: &'static str,
    name: &'static str,
    category: AssetCategory,
    driver: &'static str,
    status: AssetStatus,
    location: (f64, f64),
    destination: (f64, f64),
    cargo_type: &'static str,
    speed: f64,
    fuel_level: f64,
    driver_id: Option<&'static str>,
    project_id: Option<&'static str>,
    temperature: Option<f64>,
    last_service_date: &'static str,
    next_service_mileage: f64,
    revenue_month_to_date: f64,
    cost_month_to_date: f64,
    co2_emissions: f64,
}

const FLEET: &[SeedRow] = &[
    SeedRow {
        id: "SRC-104",
        name: "Scania R500",
        category: AssetCategory::HeavyTransport,
        driver: "Kennedy Mumba",
        status: AssetStatus::Moving,
        location: (-14.4265, 28.4396),    // Kabwe
        destination: (-12.9587, 28.6366), // Ndola
        cargo_type: "Road Base Materials",
        speed: 75.0,
        fuel_level: 82.0,
        driver_id: Some("DRV-001"),
        project_id: Some("PRJ-LND-RD"),
        temperature: None,
        last_service_date: "2024-04-10",
        next_service_mileage: 1500.0,
        revenue_month_to_date: 45000.0,
        cost_month_to_date: 12000.0,
        co2_emissions: 1240.0,
    },
    SeedRow {
        id: "SRC-205",
        name: "Volvo FH16",
        category: AssetCategory::HeavyTransport,
        driver: "Joseph Phiri",
        status: AssetStatus::Idle,
        location: (-12.1689, 26.3927),    // Solwezi
        destination: (-12.5373, 27.8458), // Chingola
        cargo_type: "Copper Concentrates",
        speed: 0.0,
        fuel_level: 45.0,
        driver_id: Some("DRV-002"),
        project_id: Some("PRJ-KANS-24"),
        temperature: Some(25.0),
        last_service_date: "2024-03-15",
        next_service_mileage: 500.0,
        revenue_month_to_date: 68000.0,
        cost_month_to_date: 18000.0,
        co2_emissions: 2100.0,
    },
    SeedRow {
        id: "SRC-330",
        name: "Mercedes Actros",
        category: AssetCategory::HeavyTransport,
        driver: "Isaac Banda",
        status: AssetStatus::Moving,
        location: (-15.9534, 28.8657),    // Chirundu
        destination: (-15.3875, 28.3228), // Lusaka
        cargo_type: "Imported Goods",
        speed: 68.0,
        fuel_level: 90.0,
        driver_id: Some("DRV-003"),
        project_id: None,
        temperature: None,
        last_service_date: "2024-05-01",
        next_service_mileage: 8000.0,
        revenue_month_to_date: 32000.0,
        cost_month_to_date: 8500.0,
        co2_emissions: 890.0,
    },
    SeedRow {
        id: "SRC-410",
        name: "Freightliner",
        category: AssetCategory::HeavyTransport,
        driver: "Peter Mulenga",
        status: AssetStatus::Breakdown,
        location: (-10.5087, 31.8129),    // Chinsali
        destination: (-12.8024, 28.2132), // Kitwe
        cargo_type: "Construction Steel",
        speed: 0.0,
        fuel_level: 15.0,
        driver_id: Some("DRV-004"),
        project_id: Some("PRJ-LND-RD"),
        temperature: None,
        last_service_date: "2023-12-20",
        next_service_mileage: -200.0,
        revenue_month_to_date: 12000.0,
        cost_month_to_date: 24000.0,
        co2_emissions: 450.0,
    },
    SeedRow {
        id: "SRC-550",
        name: "Scania G460 Tipper",
        category: AssetCategory::Construction,
        driver: "Chanda Weza",
        status: AssetStatus::Moving,
        location: (-12.2000, 26.4500),
        destination: (-12.1689, 26.3927), // mine site
        cargo_type: "Overburden",
        speed: 45.0,
        fuel_level: 30.0,
        driver_id: Some("DRV-005"),
        project_id: Some("PRJ-KANS-24"),
        temperature: None,
        last_service_date: "2024-04-20",
        next_service_mileage: 1200.0,
        revenue_month_to_date: 55000.0,
        cost_month_to_date: 15000.0,
        co2_emissions: 3200.0,
    },
    SeedRow {
        id: "SRC-601",
        name: "DAF XF105",
        category: AssetCategory::HeavyTransport,
        driver: "Emmanuel Zulu",
        status: AssetStatus::Moving,
        location: (-12.3489, 27.8265),
        destination: (-11.9383, 27.8624), // Kasumbalesa
        cargo_type: "Fuel Tanker",
        speed: 60.0,
        fuel_level: 95.0,
        driver_id: Some("DRV-006"),
        project_id: Some("PRJ-KANS-24"),
        temperature: None,
        last_service_date: "2024-05-05",
        next_service_mileage: 9000.0,
        revenue_month_to_date: 72000.0,
        cost_month_to_date: 14000.0,
        co2_emissions: 1800.0,
    },
    SeedRow {
        id: "SRC-702",
        name: "Iveco Trakker",
        category: AssetCategory::HeavyTransport,
        driver: "Abel Mwale",
        status: AssetStatus::Stopped,
        location: (-15.2724, 23.1487),    // Mongu
        destination: (-14.9416, 24.1754), // Kaoma
        cargo_type: "Maize Meal",
        speed: 0.0,
        fuel_level: 55.0,
        driver_id: Some("DRV-007"),
        project_id: Some("PRJ-MNG-AID"),
        temperature: None,
        last_service_date: "2024-02-10",
        next_service_mileage: 3000.0,
        revenue_month_to_date: 28000.0,
        cost_month_to_date: 6000.0,
        co2_emissions: 900.0,
    },
    SeedRow {
        id: "SRC-888",
        name: "Mercedes Axor",
        category: AssetCategory::HeavyTransport,
        driver: "Silas Lungu",
        status: AssetStatus::Moving,
        location: (-17.8419, 25.8528),    // Livingstone
        destination: (-16.5430, 26.0030), // Kalomo
        cargo_type: "Relief Tents",
        speed: 82.0,
        fuel_level: 70.0,
        driver_id: Some("DRV-008"),
        project_id: Some("PRJ-MNG-AID"),
        temperature: None,
        last_service_date: "2024-03-30",
        next_service_mileage: 4500.0,
        revenue_month_to_date: 31000.0,
        cost_month_to_date: 7500.0,
        co2_emissions: 1100.0,
    },
    SeedRow {
        id: "SRC-SHT-01",
        name: "Toyota Coaster",
        category: AssetCategory::Shuttle,
        driver: "Mary Kunda",
        status: AssetStatus::Moving,
        location: (-15.3275, 28.4426),    // KKIA
        destination: (-15.4167, 28.2833), // Lusaka CBD
        cargo_type: "Passengers (18)",
        speed: 55.0,
        fuel_level: 60.0,
        driver_id: Some("DRV-009"),
        project_id: Some("PRJ-KKIA-SHT"),
        temperature: None,
        last_service_date: "2024-05-10",
        next_service_mileage: 2500.0,
        revenue_month_to_date: 15000.0,
        cost_month_to_date: 3000.0,
        co2_emissions: 200.0,
    },
    SeedRow {
        id: "SRC-SHT-02",
        name: "Toyota Hiace Quantum",
        category: AssetCategory::Shuttle,
        driver: "Unassigned",
        status: AssetStatus::Idle,
        location: (-15.4167, 28.2833),
        destination: (-15.4167, 28.2833),
        cargo_type: "Passengers (14)",
        speed: 0.0,
        fuel_level: 88.0,
        driver_id: None,
        project_id: Some("PRJ-KKIA-SHT"),
        temperature: None,
        last_service_date: "2024-05-18",
        next_service_mileage: 4000.0,
        revenue_month_to_date: 8000.0,
        cost_month_to_date: 1500.0,
        co2_emissions: 150.0,
    },
    SeedRow {
        id: "SRC-CRN-01",
        name: "Liebherr LTM 1050",
        category: AssetCategory::Construction,
        driver: "John Tembo",
        status: AssetStatus::Stopped,
        location: (-14.4265, 28.4396),
        destination: (-14.4265, 28.4396),
        cargo_type: "Mobile Crane",
        speed: 0.0,
        fuel_level: 40.0,
        driver_id: Some("DRV-010"),
        project_id: Some("PRJ-LND-RD"),
        temperature: None,
        last_service_date: "2024-03-01",
        next_service_mileage: 500.0,
        revenue_month_to_date: 90000.0,
        cost_month_to_date: 25000.0,
        co2_emissions: 4000.0,
    },
    SeedRow {
        id: "SRC-REC-01",
        name: "Scania Tow Truck",
        category: AssetCategory::Support,
        driver: "Standby Crew",
        status: AssetStatus::Idle,
        location: (-12.9587, 28.6366),    // Ndola hub
        destination: (-12.9587, 28.6366),
        cargo_type: "Breakdown Recovery",
        speed: 0.0,
        fuel_level: 98.0,
        driver_id: None,
        project_id: None,
        temperature: None,
        last_service_date: "2024-05-15",
        next_service_mileage: 10000.0,
        revenue_month_to_date: 5000.0,
        cost_month_to_date: 2000.0,
        co2_emissions: 100.0,
    },
];

/// The fleet the service boots with
pub fn initial_fleet() -> Vec<Asset> {
    FLEET
        .iter()
        .map(|row| Asset {
            id: row.id.to_string(),
            name: row.name.to_string(),
            category: row.category,
            driver: row.driver.to_string(),
            cargo_type: row.cargo_type.to_string(),
            status: row.status,
            location: Coordinates::new(row.location.0, row.location.1),
            destination: Coordinates::new(row.destination.0, row.destination.1),
            fuel_level: row.fuel_level,
            speed: row.speed,
            details: AssetDetails {
                driver_id: row.driver_id.map(str::to_string),
                project_id: row.project_id.map(str::to_string),
                temperature: row.temperature,
                last_service_date: Some(row.last_service_date.to_string()),
                next_service_mileage: Some(row.next_service_mileage),
                revenue_month_to_date: Some(row.revenue_month_to_date),
                cost_month_to_date: Some(row.cost_month_to_date),
                co2_emissions: Some(row.co2_emissions),
            },
        })
        .collect()
}
