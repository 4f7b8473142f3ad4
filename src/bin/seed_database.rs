#!/usr/bin/env cargo
//! WellOps Database Seeder
//!
//! A terminal application for seeding the WellOps database with a coherent
//! demo oilfield dataset. This tool provisions users, clients, contracts,
//! contract activities, fields, wells, drilling plans, daily drilling data,
//! production data and reports through the public API, in dependency order.
//!
//! Usage:
//!   `cargo run --bin seed_database -- --url http://localhost:3000 --token YOUR_JWT_TOKEN`
//!
//! Features:
//! - Realistic drilling campaign data based on Llanos basin patterns
//! - Every payload passes the provisioning validator before it is sent
//! - Phase ordering is checked against the entity dependency table
//! - Terminal UI with progress indicators
//! - Optional JWT authentication for secured deployments

use chrono::{Duration as ChronoDuration, Utc};
use clap::{Arg, Command};
use console::style;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use reqwest::Client;
use serde_json::{Map, Value, json};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::time::{Duration, sleep};
use uuid::Uuid;
use wellops_api::provisioning::order;
use wellops_api::provisioning::validator::{self, EntityKind};

// Llanos basin stratigraphy, shallow to deep.
const FORMATIONS: &[&str] = &[
    "Guayabo",
    "León",
    "Carbonera",
    "Mirador",
    "Los Cuervos",
    "Barco",
    "Guadalupe",
];

const HOLE_SECTIONS: &[&str] = &["17 1/2\"", "12 1/4\"", "8 1/2\""];

const WELL_NAMES: &[&str] = &[
    "Aguila",
    "Caño Limón",
    "Rubiales",
    "Capachos",
    "Cusiana",
    "Cupiagua",
    "Akacías",
    "Chichimene",
];

#[derive(Debug, Clone)]
pub struct SeedingConfig {
    pub base_url: String,
    pub jwt_token: String,
    pub client: Client,
}

#[derive(Debug, Default)]
pub struct CreatedObjects {
    pub users: Vec<Value>,
    pub clients: Vec<Value>,
    pub contracts: Vec<Value>,
    pub contract_activities: Vec<Value>,
    pub fields: Vec<Value>,
    pub wells: Vec<Value>,
    pub drilling_plans: Vec<Value>,
    pub drilling_data: Vec<Value>,
    pub production_data: Vec<Value>,
    pub reports: Vec<Value>,
}

pub struct DatabaseSeeder {
    config: SeedingConfig,
    created_objects: CreatedObjects,
    provisioned: HashSet<EntityKind>,
    wells_to_create: usize,
}

/// Rename an API key to the camelCase wire form the provisioning validator
/// expects. Mechanical, except for the ROP acronym.
fn wire_key(api_key: &str) -> String {
    if api_key == "planned_rop" {
        return "plannedROP".to_string();
    }
    let mut out = String::with_capacity(api_key.len());
    let mut upper_next = false;
    for ch in api_key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Build the provisioning record for an API payload. The server assigns its
/// own ids; the one injected here only satisfies the record shape.
fn wire_record(payload: &Value) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("id".to_string(), json!(Uuid::new_v4()));
    if let Some(fields) = payload.as_object() {
        for (key, value) in fields {
            record.insert(wire_key(key), value.clone());
        }
    }
    record
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl DatabaseSeeder {
    pub fn new(base_url: String, jwt_token: String, wells_to_create: usize) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        Self {
            config: SeedingConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                jwt_token,
                client,
            },
            created_objects: CreatedObjects::default(),
            provisioned: HashSet::new(),
            wells_to_create,
        }
    }

    /// Check the dependency table before a provisioning phase runs.
    fn begin_phase(&self, kind: EntityKind) -> Result<(), Box<dyn std::error::Error>> {
        order::check_dependencies(kind, &self.provisioned)?;
        Ok(())
    }

    fn finish_phase(&mut self, kind: EntityKind) {
        self.provisioned.insert(kind);
    }

    /// Validate a batch of payloads against the provisioning rules before any
    /// of them is sent.
    fn validate_batch(
        kind: EntityKind,
        payloads: &[Value],
    ) -> Result<(), Box<dyn std::error::Error>> {
        for payload in payloads {
            validator::validate(kind, &wire_record(payload))?;
        }
        Ok(())
    }

    /// Make multiple requests in parallel with controlled concurrency
    async fn make_parallel_requests(
        &self,
        requests: Vec<(String, String, Option<Value>)>, // (method, endpoint, data)
        max_concurrent: usize,
        pb: &ProgressBar,
    ) -> Result<Vec<Value>, String> {
        let semaphore = Arc::new(Semaphore::new(max_concurrent));
        let mut tasks = Vec::new();

        for (method, endpoint, data) in requests {
            let sem = Arc::clone(&semaphore);
            let config = self.config.clone();
            let pb_clone = pb.clone();

            let task = tokio::spawn(async move {
                let _permit = sem.acquire().await.unwrap();

                let client = &config.client;
                let url = format!("{}{}", config.base_url, endpoint);

                let response = match method.to_uppercase().as_str() {
                    "POST" => {
                        let mut request = client.post(&url).header("content-type", "application/json");
                        if !config.jwt_token.is_empty() {
                            request = request
                                .header("authorization", format!("Bearer {}", config.jwt_token));
                        }
                        if let Some(json_data) = data {
                            request = request.json(&json_data);
                        }
                        request.send().await
                    }
                    "GET" => {
                        let mut request = client.get(&url);
                        if !config.jwt_token.is_empty() {
                            request = request
                                .header("authorization", format!("Bearer {}", config.jwt_token));
                        }
                        request.send().await
                    }
                    _ => return Err("Unsupported HTTP method".to_string()),
                };

                let result = match response {
                    Ok(resp) if resp.status().is_success() => resp
                        .json::<Value>()
                        .await
                        .map_err(|e| format!("JSON parse error: {e}")),
                    Ok(resp) => {
                        let status = resp.status();
                        let error_text = resp.text().await.unwrap_or_default();
                        Err(format!("HTTP {} {}: {}", status, endpoint, error_text))
                    }
                    Err(e) => Err(format!("Request error {}: {e}", endpoint)),
                };

                pb_clone.inc(1);
                result
            });

            tasks.push(task);
        }

        let results: Result<Vec<_>, String> = join_all(tasks)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Task join error: {}", e))?
            .into_iter()
            .collect();

        results
    }

    async fn make_request(
        &self,
        method: &str,
        endpoint: &str,
        data: Option<Value>,
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let mut request = match method.to_uppercase().as_str() {
            "GET" => self.config.client.get(&url),
            "POST" => self
                .config
                .client
                .post(&url)
                .header("content-type", "application/json"),
            "PUT" => self
                .config
                .client
                .put(&url)
                .header("content-type", "application/json"),
            _ => return Err("Unsupported HTTP method".into()),
        };

        if !self.config.jwt_token.is_empty() {
            request = request.header(
                "authorization",
                format!("Bearer {}", self.config.jwt_token),
            );
        }
        if let Some(json_data) = data {
            request = request.json(&json_data);
        }

        let response = request.send().await?;

        if response.status().is_success() {
            let result = response.json::<Value>().await?;
            Ok(result)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(format!("HTTP {} {}: {}", status, endpoint, error_text).into())
        }
    }

    pub async fn test_connection(&self) -> Result<(), Box<dyn std::error::Error>> {
        let health = self.make_request("GET", "/healthz", None).await?;
        if health["status"] != "ok" {
            return Err(format!("API reported unhealthy state: {health}").into());
        }
        Ok(())
    }

    pub async fn create_users(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!("{} Creating user accounts...", style("[1/10]").bold().dim());
        self.begin_phase(EntityKind::User)?;

        let users_data = vec![
            json!({
                "email": "carlos.mendoza@wellops.example",
                "name": "Carlos Mendoza",
                "password": "wellops-demo-2024",
                "role": "supervisor"
            }),
            json!({
                "email": "ana.torres@wellops.example",
                "name": "Ana Torres",
                "password": "wellops-demo-2024",
                "role": "engineer"
            }),
            json!({
                "email": "miguel.rojas@wellops.example",
                "name": "Miguel Rojas",
                "password": "wellops-demo-2024",
                "role": "operator"
            }),
            json!({
                "email": "paola.cifuentes@wellops.example",
                "name": "Paola Cifuentes",
                "password": "wellops-demo-2024",
                "role": "analyst"
            }),
        ];
        Self::validate_batch(EntityKind::User, &users_data)?;

        let pb = ProgressBar::new(users_data.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));

        for user_data in users_data {
            let name = user_data["name"].as_str().unwrap();
            pb.set_message(format!("Creating: {}", name));

            let result = self.make_request("POST", "/api/users", Some(user_data)).await?;
            self.created_objects.users.push(result);

            pb.inc(1);
            sleep(Duration::from_millis(50)).await;
        }

        pb.finish_with_message("Users created!");
        println!(
            "{} Created {} users",
            style("✅").green(),
            self.created_objects.users.len()
        );
        self.finish_phase(EntityKind::User);

        Ok(())
    }

    pub async fn create_clients(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "{} Creating client organisations...",
            style("[2/10]").bold().dim()
        );
        self.begin_phase(EntityKind::Client)?;

        let clients_data = vec![
            json!({
                "name": "Ecopetrol S.A.",
                "email": "contratos@ecopetrol.example",
                "contact_name": "Dirección de Perforación",
                "contact_email": "perforacion@ecopetrol.example",
                "address": "Bogotá D.C., Colombia"
            }),
            json!({
                "name": "Frontera Energy",
                "email": "operaciones@fronteraenergy.example",
                "contact_name": "Gerencia de Operaciones",
                "address": "Bogotá D.C., Colombia"
            }),
            json!({
                "name": "GeoPark Colombia",
                "email": "drilling@geopark.example",
                "contact_name": "Drilling Manager",
                "address": "Villavicencio, Meta"
            }),
        ];
        Self::validate_batch(EntityKind::Client, &clients_data)?;

        let pb = ProgressBar::new(clients_data.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));

        for client_data in clients_data {
            let name = client_data["name"].as_str().unwrap();
            pb.set_message(format!("Creating: {}", name));

            let result = self
                .make_request("POST", "/api/clients", Some(client_data))
                .await?;
            self.created_objects.clients.push(result);

            pb.inc(1);
            sleep(Duration::from_millis(50)).await;
        }

        pb.finish_with_message("Clients created!");
        println!(
            "{} Created {} clients",
            style("✅").green(),
            self.created_objects.clients.len()
        );
        self.finish_phase(EntityKind::Client);

        Ok(())
    }

    pub async fn create_contracts(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "{} Creating drilling contracts...",
            style("[3/10]").bold().dim()
        );
        self.begin_phase(EntityKind::Contract)?;

        let contract_templates = vec![
            (
                "Campaña de perforación Llanos 2024",
                "Perforación de desarrollo en los bloques Llanos 34 y CPO-9",
                "CT-2024-001",
                18_500_000.0,
                3650.0,
                120,
            ),
            (
                "Desarrollo Quifa Fase III",
                "Pozos de desarrollo y workover en el área Quifa",
                "CT-2024-002",
                9_200_000.0,
                2800.0,
                90,
            ),
            (
                "Exploración Piedemonte Norte",
                "Perforación exploratoria direccional en el piedemonte llanero",
                "CT-2024-003",
                24_000_000.0,
                4200.0,
                150,
            ),
        ];

        let supervisor_id = self.created_objects.users[0]["id"].as_str().unwrap();
        let mut contracts_data = Vec::new();
        for (i, (name, description, number, value, target_depth, expected_days)) in
            contract_templates.into_iter().enumerate()
        {
            let client = &self.created_objects.clients[i % self.created_objects.clients.len()];
            contracts_data.push(json!({
                "name": name,
                "description": description,
                "contract_number": number,
                "start_date": "2024-01-15T00:00:00Z",
                "end_date": "2024-12-15T00:00:00Z",
                "value": value,
                "currency": "USD",
                "status": "active",
                "contract_type": "drilling",
                "target_depth": target_depth,
                "expected_days": expected_days,
                "daily_rate": 85_000.0,
                "client_id": client["id"],
                "user_id": supervisor_id
            }));
        }
        Self::validate_batch(EntityKind::Contract, &contracts_data)?;

        let pb = ProgressBar::new(contracts_data.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));

        for contract_data in contracts_data {
            let name = contract_data["name"].as_str().unwrap();
            pb.set_message(format!("Creating: {}", name));

            let result = self
                .make_request("POST", "/api/contracts", Some(contract_data))
                .await?;
            self.created_objects.contracts.push(result);

            pb.inc(1);
            sleep(Duration::from_millis(50)).await;
        }

        pb.finish_with_message("Contracts created!");
        println!(
            "{} Created {} contracts",
            style("✅").green(),
            self.created_objects.contracts.len()
        );
        self.finish_phase(EntityKind::Contract);

        Ok(())
    }

    pub async fn create_contract_activities(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "{} Creating contract activities...",
            style("[4/10]").bold().dim()
        );
        self.begin_phase(EntityKind::ContractActivity)?;

        let activity_templates = vec![
            ("Metros perforados", "drilling", "metres", 450.0, 300.0, 550.0, 450.0, 1),
            ("Horas de rotación", "drilling", "hours", 18.0, 12.0, 22.0, 18.0, 2),
            ("Consumo de lodo", "fluids", "barrels", 850.0, 600.0, 1100.0, 850.0, 3),
        ];

        let mut activities_data = Vec::new();
        for contract in &self.created_objects.contracts {
            for (name, category, unit, target, min_rate, max_rate, optimal_rate, priority) in
                &activity_templates
            {
                activities_data.push(json!({
                    "contract_id": contract["id"],
                    "name": name,
                    "description": format!("Seguimiento diario de {}", name.to_lowercase()),
                    "category": category,
                    "unit": unit,
                    "target_value": target,
                    "priority": priority,
                    "is_active": true,
                    "min_rate": min_rate,
                    "max_rate": max_rate,
                    "optimal_rate": optimal_rate
                }));
            }
        }
        Self::validate_batch(EntityKind::ContractActivity, &activities_data)?;

        let pb = ProgressBar::new(activities_data.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));

        let requests: Vec<(String, String, Option<Value>)> = activities_data
            .into_iter()
            .map(|data| ("POST".to_string(), "/api/contract_activities".to_string(), Some(data)))
            .collect();
        let results = self
            .make_parallel_requests(requests, 5, &pb)
            .await
            .map_err(|e| format!("Activity creation failed: {}", e))?;
        self.created_objects.contract_activities.extend(results);

        pb.finish_with_message("Activities created!");
        println!(
            "{} Created {} contract activities",
            style("✅").green(),
            self.created_objects.contract_activities.len()
        );
        self.finish_phase(EntityKind::ContractActivity);

        Ok(())
    }

    pub async fn create_fields(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!("{} Creating fields...", style("[5/10]").bold().dim());
        self.begin_phase(EntityKind::Field)?;

        let field_templates = vec![
            ("Bloque Llanos 34", "Casanare", "Arenas de la formación Carbonera"),
            ("Bloque CPO-9", "Meta", "Desarrollo de crudo pesado"),
            ("Área Quifa", "Puerto Gaitán, Meta", "Campo de desarrollo en producción"),
            ("Piedemonte Norte", "Arauca", "Estructuras profundas del piedemonte"),
        ];

        let mut fields_data = Vec::new();
        for (i, (name, location, description)) in field_templates.into_iter().enumerate() {
            let contract =
                &self.created_objects.contracts[i % self.created_objects.contracts.len()];
            fields_data.push(json!({
                "name": name,
                "location": location,
                "description": description,
                "contract_id": contract["id"]
            }));
        }
        Self::validate_batch(EntityKind::Field, &fields_data)?;

        let pb = ProgressBar::new(fields_data.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));

        for field_data in fields_data {
            let name = field_data["name"].as_str().unwrap();
            pb.set_message(format!("Creating: {}", name));

            let result = self
                .make_request("POST", "/api/fields", Some(field_data))
                .await?;
            self.created_objects.fields.push(result);

            pb.inc(1);
            sleep(Duration::from_millis(50)).await;
        }

        pb.finish_with_message("Fields created!");
        println!(
            "{} Created {} fields",
            style("✅").green(),
            self.created_objects.fields.len()
        );
        self.finish_phase(EntityKind::Field);

        Ok(())
    }

    pub async fn create_wells(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!("{} Creating wells...", style("[6/10]").bold().dim());
        self.begin_phase(EntityKind::Well)?;

        let well_types = ["vertical", "horizontal", "direccional"];
        let mut wells_data = Vec::new();
        {
            let mut rng = rand::rng();
            for i in 0..self.wells_to_create {
                let field = &self.created_objects.fields[i % self.created_objects.fields.len()];
                // Engineers and operators take turns as the responsible user.
                let user = &self.created_objects.users[1 + (i % 2)];
                let base_name = WELL_NAMES[i % WELL_NAMES.len()];
                wells_data.push(json!({
                    "name": format!("Pozo {}-{}", base_name, i + 1),
                    "location": field["location"],
                    "status": "drilling",
                    "well_type": well_types[i % well_types.len()],
                    "operation": "drilling",
                    "latitude": (rng.random_range(4.0..7.0_f64) * 10000.0).round() / 10000.0,
                    "longitude": (rng.random_range(-72.5..-69.5_f64) * 10000.0).round() / 10000.0,
                    "initial_date": (Utc::now() - ChronoDuration::days(20 + i as i64))
                        .format("%Y-%m-%dT06:00:00Z")
                        .to_string(),
                    "formation": FORMATIONS[0],
                    "hole_section": HOLE_SECTIONS[0],
                    "user_id": user["id"],
                    "field_id": field["id"]
                }));
            }
        }
        Self::validate_batch(EntityKind::Well, &wells_data)?;

        let pb = ProgressBar::new(wells_data.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));

        for well_data in wells_data {
            let name = well_data["name"].as_str().unwrap();
            pb.set_message(format!("Creating: {}", name));

            let result = self
                .make_request("POST", "/api/wells", Some(well_data))
                .await?;
            self.created_objects.wells.push(result);

            pb.inc(1);
            sleep(Duration::from_millis(50)).await;
        }

        pb.finish_with_message("Wells created!");
        println!(
            "{} Created {} wells",
            style("✅").green(),
            self.created_objects.wells.len()
        );
        self.finish_phase(EntityKind::Well);

        Ok(())
    }

    pub async fn create_drilling_plans(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "{} Creating drilling plans...",
            style("[7/10]").bold().dim()
        );
        self.begin_phase(EntityKind::DrillingPlan)?;

        let mut plans_data = Vec::new();
        {
            let mut rng = rand::rng();
            for well in &self.created_objects.wells {
                let well_id = well["id"].as_str().unwrap();
                let total_days = rng.random_range(10..=13);
                let mut depth = 0.0;

                for day in 1..=total_days {
                    let interval = round1(rng.random_range(320.0..520.0));
                    let depth_from = depth;
                    depth += interval;

                    // Section and formation advance with the fraction of the
                    // programme already drilled.
                    let progress = f64::from(day) / f64::from(total_days);
                    let section_idx = ((progress * HOLE_SECTIONS.len() as f64) as usize)
                        .min(HOLE_SECTIONS.len() - 1);
                    let formation = FORMATIONS[((progress * FORMATIONS.len() as f64) as usize)
                        .min(FORMATIONS.len() - 1)];

                    plans_data.push(json!({
                        "well_id": well_id,
                        "day": day,
                        "depth_from": depth_from,
                        "depth_to": depth,
                        "planned_rop": round1(rng.random_range(180.0..280.0)),
                        "planned_hours": round1(rng.random_range(16.0..22.0)),
                        "formation": formation,
                        "hole_section": HOLE_SECTIONS[section_idx],
                        "operation": "drilling",
                        "mud_type": if progress < 0.5 { "WBM" } else { "OBM" },
                        "bit_type": "PDC",
                        "bit_size": [17.5, 12.25, 8.5][section_idx]
                    }));
                }
            }
        }
        Self::validate_batch(EntityKind::DrillingPlan, &plans_data)?;

        let pb = ProgressBar::new(plans_data.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));
        pb.set_message("Creating plan rows");

        let requests: Vec<(String, String, Option<Value>)> = plans_data
            .into_iter()
            .map(|data| ("POST".to_string(), "/api/drilling_plans".to_string(), Some(data)))
            .collect();
        let results = self
            .make_parallel_requests(requests, 8, &pb)
            .await
            .map_err(|e| format!("Plan creation failed: {}", e))?;
        self.created_objects.drilling_plans.extend(results);

        pb.finish_with_message("Drilling plans created!");
        println!(
            "{} Created {} drilling plan rows",
            style("✅").green(),
            self.created_objects.drilling_plans.len()
        );
        self.finish_phase(EntityKind::DrillingPlan);

        Ok(())
    }

    pub async fn create_drilling_data(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "{} Creating daily drilling data...",
            style("[8/10]").bold().dim()
        );
        self.begin_phase(EntityKind::DrillingData)?;

        let mut data_rows = Vec::new();
        {
            let mut rng = rand::rng();
            for well in &self.created_objects.wells {
                let well_id = well["id"].as_str().unwrap();
                let plan_rows: Vec<&Value> = self
                    .created_objects
                    .drilling_plans
                    .iter()
                    .filter(|row| row["well_id"] == well["id"])
                    .collect();

                // Wells are mid-campaign: roughly the first seventy percent of
                // the programme has been drilled.
                let days_drilled = (plan_rows.len() * 7 / 10).max(1);
                let mut last_depth = 0.0;

                for plan in plan_rows.iter().take(days_drilled) {
                    let day = plan["day"].as_i64().unwrap();
                    let plan_depth = plan["depth_to"].as_f64().unwrap();
                    let planned_rop = plan["planned_rop"].as_f64().unwrap();
                    let planned_hours = plan["planned_hours"].as_f64().unwrap();

                    // Reported depth tracks the plan with bounded deviation and
                    // never regresses.
                    let mut reported = plan_depth * rng.random_range(0.94..1.04);
                    if reported <= last_depth {
                        reported = last_depth + rng.random_range(20.0..60.0);
                    }
                    let reported = round1(reported);
                    last_depth = reported;

                    let date = (Utc::now()
                        - ChronoDuration::days(days_drilled as i64 - day + 1))
                    .format("%Y-%m-%dT06:00:00Z")
                    .to_string();

                    data_rows.push(json!({
                        "well_id": well_id,
                        "day": day,
                        "date": date,
                        "depth": reported,
                        "rop": round1(planned_rop * rng.random_range(0.85..1.12)),
                        "drilling_time": round1(planned_hours * rng.random_range(0.88..1.08)),
                        "status": if day % 5 == 0 { "tripping" } else { "drilling" },
                        "shift": if day % 2 == 0 { "night" } else { "day" },
                        "crew": if day % 2 == 0 { "Cuadrilla B" } else { "Cuadrilla A" },
                        "formation": plan["formation"],
                        "hole_section": plan["hole_section"],
                        "operation": "drilling"
                    }));
                }
            }
        }
        Self::validate_batch(EntityKind::DrillingData, &data_rows)?;

        let pb = ProgressBar::new(data_rows.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));
        pb.set_message("Creating progress rows");

        let requests: Vec<(String, String, Option<Value>)> = data_rows
            .into_iter()
            .map(|data| ("POST".to_string(), "/api/drilling_data".to_string(), Some(data)))
            .collect();
        let results = self
            .make_parallel_requests(requests, 8, &pb)
            .await
            .map_err(|e| format!("Progress creation failed: {}", e))?;
        self.created_objects.drilling_data.extend(results);

        pb.finish_with_message("Drilling data created!");
        println!(
            "{} Created {} drilling data rows",
            style("✅").green(),
            self.created_objects.drilling_data.len()
        );
        self.finish_phase(EntityKind::DrillingData);

        Ok(())
    }

    pub async fn create_production_data(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "{} Creating production data...",
            style("[9/10]").bold().dim()
        );
        self.begin_phase(EntityKind::ProductionData)?;

        let mut production_rows = Vec::new();
        {
            let mut rng = rand::rng();
            // Every third well already flows.
            for well in self.created_objects.wells.iter().step_by(3) {
                let well_id = well["id"].as_str().unwrap();
                for day in 0..14_i64 {
                    production_rows.push(json!({
                        "well_id": well_id,
                        "production": round1(rng.random_range(3200.0..4800.0)),
                        "pressure": round1(rng.random_range(1500.0..2400.0)),
                        "temperature": round1(rng.random_range(80.0..105.0)),
                        "record_date": (Utc::now() - ChronoDuration::days(14 - day))
                            .format("%Y-%m-%dT00:00:00Z")
                            .to_string()
                    }));
                }
            }
        }
        Self::validate_batch(EntityKind::ProductionData, &production_rows)?;

        let pb = ProgressBar::new(production_rows.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));
        pb.set_message("Creating production rows");

        let requests: Vec<(String, String, Option<Value>)> = production_rows
            .into_iter()
            .map(|data| ("POST".to_string(), "/api/production_data".to_string(), Some(data)))
            .collect();
        let results = self
            .make_parallel_requests(requests, 8, &pb)
            .await
            .map_err(|e| format!("Production creation failed: {}", e))?;
        self.created_objects.production_data.extend(results);

        pb.finish_with_message("Production data created!");
        println!(
            "{} Created {} production rows",
            style("✅").green(),
            self.created_objects.production_data.len()
        );
        self.finish_phase(EntityKind::ProductionData);

        Ok(())
    }

    pub async fn create_reports(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!("{} Creating reports...", style("[10/10]").bold().dim());
        self.begin_phase(EntityKind::Report)?;

        let analyst_id = self.created_objects.users[3]["id"].as_str().unwrap();
        let first_well = &self.created_objects.wells[0];

        let reports_data = vec![
            json!({
                "user_id": analyst_id,
                "title": "Avance semanal de perforación",
                "report_type": "plan_vs_actual",
                "parameters": {
                    "wellId": first_well["id"],
                    "fromDay": 1,
                    "toDay": 7
                }
            }),
            json!({
                "user_id": analyst_id,
                "title": "Resumen de producción quincenal",
                "report_type": "production_summary",
                "parameters": {
                    "window_days": 14
                }
            }),
        ];
        Self::validate_batch(EntityKind::Report, &reports_data)?;

        let pb = ProgressBar::new(reports_data.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));

        for report_data in reports_data {
            let title = report_data["title"].as_str().unwrap();
            pb.set_message(format!("Creating: {}", title));

            let result = self
                .make_request("POST", "/api/reports", Some(report_data))
                .await?;
            self.created_objects.reports.push(result);

            pb.inc(1);
            sleep(Duration::from_millis(50)).await;
        }

        pb.finish_with_message("Reports created!");
        println!(
            "{} Created {} reports",
            style("✅").green(),
            self.created_objects.reports.len()
        );
        self.finish_phase(EntityKind::Report);

        Ok(())
    }

    pub async fn seed_database(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!();
        println!("{}", style("WellOps Database Seeder").bold().blue());
        println!(
            "{}",
            style("Creating a coherent demo drilling campaign...").dim()
        );
        println!();

        self.test_connection().await?;
        println!("{} API is reachable", style("✅").green());

        // Execute seeding steps in dependency order
        self.create_users().await?;
        self.create_clients().await?;
        self.create_contracts().await?;
        self.create_contract_activities().await?;
        self.create_fields().await?;
        self.create_wells().await?;
        self.create_drilling_plans().await?;
        self.create_drilling_data().await?;
        self.create_production_data().await?;
        self.create_reports().await?;

        // Display summary
        self.display_summary();

        Ok(())
    }

    fn display_summary(&self) {
        println!();
        println!("{}", style("🎉 Database Seeding Complete!").bold().green());
        println!("{}", style("═".repeat(50)).dim());

        let summary_data = vec![
            ("Users", self.created_objects.users.len()),
            ("Clients", self.created_objects.clients.len()),
            ("Contracts", self.created_objects.contracts.len()),
            (
                "Contract Activities",
                self.created_objects.contract_activities.len(),
            ),
            ("Fields", self.created_objects.fields.len()),
            ("Wells", self.created_objects.wells.len()),
            ("Drilling Plans", self.created_objects.drilling_plans.len()),
            ("Drilling Data", self.created_objects.drilling_data.len()),
            (
                "Production Data",
                self.created_objects.production_data.len(),
            ),
            ("Reports", self.created_objects.reports.len()),
        ];

        for (name, count) in summary_data {
            if count > 0 {
                println!(
                    "{:.<20} {}",
                    style(name).cyan(),
                    style(count).bold().green()
                );
            }
        }

        println!();
        println!("{} Next Steps:", style("🎯").cyan());
        println!(
            "  {} Open the dashboard to explore the demo campaign",
            style("•").dim()
        );
        println!(
            "  {} GET /api/wells/{{id}}/plan_vs_actual for the reconciled series",
            style("•").dim()
        );
        println!(
            "  {} Browse /api/docs for the full API surface",
            style("•").dim()
        );
        println!();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("WellOps Database Seeder")
        .version("1.0")
        .author("WellOps Development Team")
        .about("Seeds the WellOps database with a coherent demo drilling campaign")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("API base URL")
                .default_value("http://localhost:3000"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .value_name("JWT_TOKEN")
                .help("JWT authentication token (omit for open deployments)"),
        )
        .arg(
            Arg::new("wells")
                .short('w')
                .long("wells")
                .value_name("COUNT")
                .help("Number of wells to provision")
                .default_value("6"),
        )
        .get_matches();

    let base_url = matches.get_one::<String>("url").unwrap().clone();
    let jwt_token = matches
        .get_one::<String>("token")
        .cloned()
        .unwrap_or_default();
    let wells_to_create = matches
        .get_one::<String>("wells")
        .unwrap()
        .parse::<usize>()?
        .max(1);

    println!("{}", style("WellOps Database Seeder v1.0").bold());
    println!("{}", style("━".repeat(40)).dim());
    println!("API URL: {}", style(&base_url).cyan());
    if jwt_token.is_empty() {
        println!("Token:   {}", style("(none - open deployment)").dim());
    } else {
        println!(
            "Token:   {}...{}",
            style("*".repeat(8)).dim(),
            style(&jwt_token[jwt_token.len().saturating_sub(8)..]).dim()
        );
    }

    let mut seeder = DatabaseSeeder::new(base_url, jwt_token, wells_to_create);
    seeder.seed_database().await?;

    Ok(())
}
