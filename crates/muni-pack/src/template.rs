//! # Authoring Template
//!
//! A complete, valid starter snapshot for authoring a new jurisdiction:
//! download, rename "My Jurisdiction", replace the figures, re-import.
//! The template carries deliberately round numbers and one of every
//! commonly needed revenue type so authors see the full field set in
//! context.

use muni_core::{
    BudgetCategory, BudgetEmphasis, CategoryId, HousingStatus, Jurisdiction, JurisdictionConfig,
    JurisdictionId, JurisdictionType, PayerType, ResidentProfile, RevenueSource, RevenueType,
    ServiceIcon, SourceId,
};

use crate::snapshot::JurisdictionData;

fn jid(id: &str) -> JurisdictionId {
    JurisdictionId::new(id).expect("static template identifier")
}
fn cid(id: &str) -> CategoryId {
    CategoryId::new(id).expect("static template identifier")
}
fn sid(id: &str) -> SourceId {
    SourceId::new(id).expect("static template identifier")
}

/// Build the starter template snapshot ("My Jurisdiction", pop 50,000).
pub fn starter_template() -> JurisdictionData {
    let jurisdiction_id = jid("my-jurisdiction");

    JurisdictionData {
        jurisdiction: Jurisdiction {
            id: jurisdiction_id.clone(),
            name: "My Jurisdiction".into(),
            jurisdiction_type: JurisdictionType::City,
            state: "XX".into(),
            population: 50_000,
            median_home_value: 300_000.0,
            total_budget: 50_000_000.0,
            fiscal_year: "2025".into(),
            governance_structure: Some("Council-Manager".into()),
            config: JurisdictionConfig {
                max_categories: 8,
                emphasis: BudgetEmphasis::BalancedServices,
                show_fixed_costs: true,
                comparison_phrase: "city services".into(),
                daily_rounding: 0.01,
            },
        },
        budget_categories: vec![
            BudgetCategory {
                id: cid("police"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Police & Public Safety".into(),
                amount: 15_000_000.0,
                fixed_percentage: 80.0,
                icon: ServiceIcon::Shield,
                color: "#3b82f6".into(),
                description: "Law enforcement, dispatch, and public safety".into(),
                constraints: Some(vec![
                    "Union contracts".into(),
                    "Minimum staffing requirements".into(),
                ]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("fire"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Fire & EMS".into(),
                amount: 10_000_000.0,
                fixed_percentage: 75.0,
                icon: ServiceIcon::Flame,
                color: "#ef4444".into(),
                description: "Fire protection and emergency medical services".into(),
                constraints: Some(vec!["Equipment costs".into(), "Training mandates".into()]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("public-works"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Public Works".into(),
                amount: 8_000_000.0,
                fixed_percentage: 50.0,
                icon: ServiceIcon::Truck,
                color: "#6b7280".into(),
                description: "Streets, sanitation, and infrastructure".into(),
                constraints: Some(vec!["Equipment leases".into()]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("parks"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Parks & Recreation".into(),
                amount: 5_000_000.0,
                fixed_percentage: 35.0,
                icon: ServiceIcon::Trees,
                color: "#10b981".into(),
                description: "Parks, recreation facilities, and programs".into(),
                constraints: Some(vec!["Facility maintenance".into()]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("admin"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Administration".into(),
                amount: 7_000_000.0,
                fixed_percentage: 70.0,
                icon: ServiceIcon::Building,
                color: "#8b5cf6".into(),
                description: "Government operations, finance, and legal".into(),
                constraints: Some(vec!["Staff salaries".into(), "Insurance".into()]),
                subcategories: None,
            },
            BudgetCategory {
                id: cid("other"),
                jurisdiction_id: jurisdiction_id.clone(),
                name: "Other Services".into(),
                amount: 5_000_000.0,
                fixed_percentage: 40.0,
                icon: ServiceIcon::Users,
                color: "#f59e0b".into(),
                description: "Library, community services, and other programs".into(),
                constraints: Some(vec![]),
                subcategories: None,
            },
        ],
        revenue_sources: vec![
            RevenueSource {
                id: sid("property-tax"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::PropertyTax,
                name: "Property Tax".into(),
                amount: 25_000_000.0,
                // $1.20 per $100 as a decimal (1.20 / 100).
                rate: Some(0.012),
                base: Some(1.0),
                description: Some("Tax on real property".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(70.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("sales-tax"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::SalesTax,
                name: "Local Sales Tax".into(),
                amount: 12_000_000.0,
                rate: Some(0.01),
                base: None,
                description: Some("Local portion of sales tax".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(60.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("utility-fees"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::UtilityFees,
                name: "Utility Fees".into(),
                amount: 8_000_000.0,
                rate: Some(75.0),
                base: None,
                description: Some("Water, sewer, and trash fees".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(75.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("grants"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::Grants,
                name: "Intergovernmental".into(),
                amount: 3_000_000.0,
                rate: None,
                base: None,
                description: Some("State and federal grants".into()),
                payer: Some(PayerType::Government),
                residential_share: Some(0.0),
                property_class: None,
            },
            RevenueSource {
                id: sid("other"),
                jurisdiction_id: jurisdiction_id.clone(),
                revenue_type: RevenueType::Other,
                name: "Other Revenue".into(),
                amount: 2_000_000.0,
                rate: None,
                base: None,
                description: Some("Permits, fines, fees, and miscellaneous".into()),
                payer: Some(PayerType::Mixed),
                residential_share: Some(50.0),
                property_class: None,
            },
        ],
        average_resident: Some(ResidentProfile {
            id: None,
            jurisdiction_id,
            housing_status: HousingStatus::Own,
            home_value: Some(300_000.0),
            annual_rent: None,
            household_income: 75_000.0,
            works_locally: true,
            household_size: 2.5,
            monthly_water_usage: None,
            vehicles_registered: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_categories_sum_to_budget() {
        let pack = starter_template();
        let sum: f64 = pack.budget_categories.iter().map(|c| c.amount).sum();
        assert_eq!(sum, pack.jurisdiction.total_budget);
    }

    #[test]
    fn template_revenue_sums_to_budget() {
        let pack = starter_template();
        let sum: f64 = pack.revenue_sources.iter().map(|s| s.amount).sum();
        assert_eq!(sum, pack.jurisdiction.total_budget);
    }

    #[test]
    fn template_ships_average_resident() {
        let pack = starter_template();
        let resident = pack.average_resident.as_ref().unwrap();
        assert_eq!(resident.jurisdiction_id, pack.jurisdiction.id);
        assert_eq!(resident.household_size, 2.5);
    }

    #[test]
    fn template_exports_and_reimports() {
        let pack = starter_template();
        let json = pack.to_json().unwrap();
        let back = JurisdictionData::from_json(&json).unwrap();
        assert_eq!(back, pack);
    }
}
