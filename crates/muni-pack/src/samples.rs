//! # Built-In Sample Jurisdictions
//!
//! Two complete, realistic datasets for first-run exploration and tests:
//! a small Ohio township and a mid-size Ohio city. Figures are
//! illustrative but internally coherent — category sums match the
//! declared budgets, and the city carries a known revenue-side surplus
//! (enterprise-fund money that never hits the general budget), which
//! exercises the advisory balance warning.

use muni_core::{
    BudgetCategory, BudgetEmphasis, CategoryId, HousingStatus, Jurisdiction, JurisdictionConfig,
    JurisdictionId, JurisdictionType, PayerType, ResidentProfile, RevenueSource, RevenueType,
    ServiceIcon, SourceId,
};

use crate::snapshot::JurisdictionData;

// Sample identifiers are static literals; construction cannot fail.
fn jid(id: &str) -> JurisdictionId {
    JurisdictionId::new(id).expect("static sample identifier")
}
fn cid(id: &str) -> CategoryId {
    CategoryId::new(id).expect("static sample identifier")
}
fn sid(id: &str) -> SourceId {
    SourceId::new(id).expect("static sample identifier")
}

/// Liberty Township, OH — population 3,200, five budget categories,
/// property-tax-led revenue. Demonstrates the small-jurisdiction
/// configuration: quarter-dollar daily rounding and
/// systems-over-departments emphasis.
pub fn sample_township() -> JurisdictionData {
    let jurisdiction_id = jid("liberty-township");

    JurisdictionData {
        jurisdiction: Jurisdiction {
            id: jurisdiction_id.clone(),
            name: "Liberty Township".into(),
            jurisdiction_type: JurisdictionType::Township,
            state: "OH".into(),
            population: 3_200,
            median_home_value: 185_000.0,
            total_budget: 2_850_000.0,
            fiscal_year: "2024".into(),
            governance_structure: Some("Three-member Board of Trustees".into()),
            config: JurisdictionConfig {
                max_categories: 5,
                emphasis: BudgetEmphasis::SystemsOverDepartments,
                show_fixed_costs: true,
                comparison_phrase: "community system".into(),
                daily_rounding: 0.25,
            },
        },
        budget_categories: vec![
            BudgetCategory {
                id: cid("safety-services"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Safety Services".into(),
                amount: 980_000.0,
                fixed_percentage: 75.0,
                icon: ServiceIcon::Shield,
                color: "#3b82f6".into(),
                description: "Police protection, fire services, and emergency medical response"
                    .into(),
                constraints: Some(vec![
                    "Union contracts".into(),
                    "Minimum staffing requirements".into(),
                    "Equipment maintenance schedules".into(),
                ]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("roads-infrastructure"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Roads & Infrastructure".into(),
                amount: 720_000.0,
                fixed_percentage: 60.0,
                icon: ServiceIcon::Road,
                color: "#6b7280".into(),
                description: "Road maintenance, snow removal, storm drainage, and bridge repairs"
                    .into(),
                constraints: Some(vec![
                    "State maintenance mandates".into(),
                    "Equipment leases".into(),
                    "Salt contracts".into(),
                ]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("administration"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Administration".into(),
                amount: 485_000.0,
                fixed_percentage: 80.0,
                icon: ServiceIcon::Building,
                color: "#8b5cf6".into(),
                description: "Township operations, fiscal management, zoning, and public records"
                    .into(),
                constraints: Some(vec![
                    "Staff salaries".into(),
                    "Insurance premiums".into(),
                    "Legal requirements".into(),
                ]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("parks-recreation"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Parks & Recreation".into(),
                amount: 380_000.0,
                fixed_percentage: 40.0,
                icon: ServiceIcon::Trees,
                color: "#10b981".into(),
                description: "Park maintenance, recreation programs, and community events".into(),
                constraints: Some(vec!["Facility maintenance".into(), "Insurance".into()]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("cemetery-services"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Cemetery & Other Services".into(),
                amount: 285_000.0,
                fixed_percentage: 50.0,
                icon: ServiceIcon::Users,
                color: "#f59e0b".into(),
                description: "Cemetery maintenance, community services, and reserve funds".into(),
                constraints: Some(vec!["Cemetery perpetual care fund".into()]),
                subcategories: None,
            },
        ],
        revenue_sources: vec![
            RevenueSource {
                id: sid("property-tax"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::PropertyTax,
                name: "Property Tax".into(),
                amount: 1_650_000.0,
                rate: Some(0.0089),
                base: Some(0.35),
                description: Some("Primary revenue source based on property values".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(85.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("local-wage-tax"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::WageTax,
                name: "Local Wage Tax".into(),
                amount: 720_000.0,
                rate: Some(0.01),
                base: None,
                description: Some("Wage tax on those who work in the township".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(70.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("state-funding"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::Grants,
                name: "State & Federal Funding".into(),
                amount: 280_000.0,
                rate: None,
                base: None,
                description: Some("State shared revenue and grants".into()),
                payer: Some(PayerType::Government),
                residential_share: Some(0.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("fees-permits"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::PermitsFees,
                name: "Fees & Permits".into(),
                amount: 200_000.0,
                rate: Some(62.5),
                base: None,
                description: Some("Zoning permits, park fees, and other charges".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(60.0),
                property_class: None,
            },
        ],
        average_resident: Some(ResidentProfile {
            id: None,
            jurisdiction_id,
            housing_status: HousingStatus::Own,
            home_value: Some(185_000.0),
            annual_rent: None,
            household_income: 72_000.0,
            works_locally: false,
            household_size: 2.4,
            monthly_water_usage: None,
            vehicles_registered: None,
        }),
    }
}

/// City of Riverside, OH — population 28,500, eight budget categories,
/// a broader revenue mix (income tax, wage tax, hotel tax), and a known
/// revenue-over-budget mismatch from enterprise funds.
pub fn sample_city() -> JurisdictionData {
    let jurisdiction_id = jid("riverside-city");

    JurisdictionData {
        jurisdiction: Jurisdiction {
            id: jurisdiction_id.clone(),
            name: "City of Riverside".into(),
            jurisdiction_type: JurisdictionType::City,
            state: "OH".into(),
            population: 28_500,
            median_home_value: 245_000.0,
            total_budget: 42_000_000.0,
            fiscal_year: "2024".into(),
            governance_structure: Some("Mayor-Council".into()),
            config: JurisdictionConfig {
                max_categories: 8,
                emphasis: BudgetEmphasis::BalancedServices,
                show_fixed_costs: true,
                comparison_phrase: "city services".into(),
                daily_rounding: 0.1,
            },
        },
        budget_categories: vec![
            BudgetCategory {
                id: cid("police"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Police & Safety".into(),
                amount: 12_600_000.0,
                fixed_percentage: 85.0,
                icon: ServiceIcon::Shield,
                color: "#3b82f6".into(),
                description: "Police department, dispatch, and public safety operations".into(),
                constraints: Some(vec![
                    "Union contracts".into(),
                    "Minimum staffing".into(),
                    "Equipment costs".into(),
                ]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("fire-ems"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Fire & EMS".into(),
                amount: 8_400_000.0,
                fixed_percentage: 80.0,
                icon: ServiceIcon::Flame,
                color: "#ef4444".into(),
                description: "Fire department and emergency medical services".into(),
                constraints: Some(vec![
                    "Union contracts".into(),
                    "Apparatus maintenance".into(),
                    "Training mandates".into(),
                ]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("public-works"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Public Works".into(),
                amount: 6_300_000.0,
                fixed_percentage: 55.0,
                icon: ServiceIcon::Truck,
                color: "#6b7280".into(),
                description: "Streets, sanitation, fleet maintenance, and infrastructure".into(),
                constraints: Some(vec!["Equipment leases".into(), "Fuel contracts".into()]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("utilities"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Water & Sewer".into(),
                amount: 5_250_000.0,
                fixed_percentage: 70.0,
                icon: ServiceIcon::Droplet,
                color: "#06b6d4".into(),
                description: "Water treatment, distribution, and wastewater services".into(),
                constraints: Some(vec![
                    "EPA mandates".into(),
                    "Infrastructure bonds".into(),
                    "Chemical costs".into(),
                ]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("parks-rec"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Parks & Recreation".into(),
                amount: 3_150_000.0,
                fixed_percentage: 35.0,
                icon: ServiceIcon::Trees,
                color: "#10b981".into(),
                description: "Parks, pools, recreation centers, and community programs".into(),
                constraints: Some(vec!["Facility maintenance".into()]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("administration"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "General Government".into(),
                amount: 2_940_000.0,
                fixed_percentage: 75.0,
                icon: ServiceIcon::Building,
                color: "#8b5cf6".into(),
                description: "City administration, finance, HR, and legal services".into(),
                constraints: Some(vec![
                    "Salaries".into(),
                    "Insurance".into(),
                    "Audit requirements".into(),
                ]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("library"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Library Services".into(),
                amount: 1_680_000.0,
                fixed_percentage: 60.0,
                icon: ServiceIcon::Book,
                color: "#f59e0b".into(),
                description: "Public library operations and programs".into(),
                constraints: Some(vec!["Building costs".into(), "Staff salaries".into()]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("community-dev"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Community Development".into(),
                amount: 1_680_000.0,
                fixed_percentage: 40.0,
                icon: ServiceIcon::Home,
                color: "#ec4899".into(),
                description: "Planning, zoning, economic development, and housing programs".into(),
                constraints: Some(vec!["Grant match requirements".into()]),
                subcategories: None,
            },
        ],
        revenue_sources: vec![
            RevenueSource {
                id: sid("property-tax"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::PropertyTax,
                name: "Property Tax".into(),
                amount: 14_700_000.0,
                rate: Some(0.0125),
                base: Some(0.35),
                description: Some("Property taxes on real estate".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(65.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("income-tax"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::IncomeTax,
                name: "Resident Income Tax".into(),
                amount: 10_000_000.0,
                rate: Some(0.015),
                base: None,
                description: Some("1.5% income tax on all residents".into()),
                payer: Some(PayerType::Residential),
                residential_share: Some(100.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("wage-tax"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::WageTax,
                name: "Worker Wage Tax".into(),
                amount: 6_800_000.0,
                rate: Some(0.005),
                base: None,
                description: Some("0.5% additional tax for those who work in the city".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(55.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("business-income-tax"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::IncomeTax,
                name: "Business Net Profits Tax".into(),
                amount: 4_200_000.0,
                rate: Some(0.015),
                base: None,
                description: Some("1.5% tax on business profits".into()),
                payer: Some(PayerType::Commercial),
                residential_share: Some(0.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("utility-fees"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::UtilityFees,
                name: "Utility Fees".into(),
                amount: 6_300_000.0,
                rate: Some(75.0),
                base: None,
                description: Some("Water, sewer, and trash fees".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(70.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("grants"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::Grants,
                name: "Grants & Intergovernmental".into(),
                amount: 2_520_000.0,
                rate: None,
                base: None,
                description: Some("State and federal grants".into()),
                payer: Some(PayerType::Government),
                residential_share: Some(0.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("hotel-tax"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::Other,
                name: "Hotel/Lodging Tax".into(),
                amount: 850_000.0,
                rate: Some(0.03),
                base: None,
                description: Some("3% tax on hotel stays".into()),
                payer: Some(PayerType::Visitors),
                residential_share: Some(5.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("other"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::Other,
                name: "Other Revenue".into(),
                amount: 830_000.0,
                rate: Some(29.0),
                base: None,
                description: Some("Permits, fines, interest, and miscellaneous".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(50.0),
                property_class: None,
            },
        ],
        average_resident: Some(ResidentProfile {
            id: None,
            jurisdiction_id,
            housing_status: HousingStatus::Own,
            home_value: Some(245_000.0),
            annual_rent: None,
            household_income: 68_000.0,
            works_locally: true,
            household_size: 2.3,
            monthly_water_usage: Some(4_500.0),
            vehicles_registered: None,
        }),
    }
}
