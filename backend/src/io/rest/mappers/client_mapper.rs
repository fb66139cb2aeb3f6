//! backend/src/io/rest/mappers/client_mapper.rs

use crate::domain::models::client::{Client as DomainClient, Visit as DomainVisit};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use shared::{
    Client as SharedClient, ClientListResponse, ClientResponse, Visit as SharedVisit,
    VisitHistoryResponse, VisitResponse,
};

/// Mapper to convert between shared Client/Visit DTOs and domain models.
pub struct ClientMapper;

impl ClientMapper {
    /// Converts a shared Client DTO to a domain Client model.
    pub fn to_domain(dto: SharedClient) -> Result<DomainClient> {
        let birthday = dto
            .birthday
            .map(|b| {
                NaiveDate::parse_from_str(&b, "%Y-%m-%d")
                    .context("Failed to parse birthday from shared DTO")
            })
            .transpose()?;
        let created_at = DateTime::parse_from_rfc3339(&dto.created_at)
            .context("Failed to parse created_at from shared DTO")?
            .with_timezone(&Utc);
        let visits = dto
            .visits
            .into_iter()
            .map(Self::visit_to_domain)
            .collect::<Result<Vec<_>>>()?;

        Ok(DomainClient {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            birthday,
            visits,
            created_at,
        })
    }

    /// Converts a domain Client model to a shared Client DTO.
    pub fn to_dto(domain: DomainClient) -> SharedClient {
        SharedClient {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
            birthday: domain.birthday.map(|b| b.format("%Y-%m-%d").to_string()),
            visits: domain.visits.into_iter().map(Self::visit_to_dto).collect(),
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    /// Converts a shared Visit DTO to a domain Visit model.
    pub fn visit_to_domain(dto: SharedVisit) -> Result<DomainVisit> {
        let date = DateTime::parse_from_rfc3339(&dto.date)
            .context("Failed to parse visit date from shared DTO")?
            .with_timezone(&Utc);

        Ok(DomainVisit {
            id: dto.id,
            date,
            service: dto.service,
            price: dto.price,
            notes: dto.notes,
        })
    }

    /// Converts a domain Visit model to a shared Visit DTO.
    pub fn visit_to_dto(domain: DomainVisit) -> SharedVisit {
        SharedVisit {
            id: domain.id,
            date: domain.date.to_rfc3339(),
            service: domain.service,
            price: domain.price,
            notes: domain.notes,
        }
    }

    pub fn to_client_list_dto(domain_clients: Vec<DomainClient>) -> ClientListResponse {
        ClientListResponse {
            clients: domain_clients.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_client_response_dto(domain: DomainClient, message: &str) -> ClientResponse {
        ClientResponse {
            client: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_visit_response_dto(domain: DomainVisit, message: &str) -> VisitResponse {
        VisitResponse {
            visit: Self::visit_to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_visit_history_dto(domain_visits: Vec<DomainVisit>) -> VisitHistoryResponse {
        VisitHistoryResponse {
            visits: domain_visits.into_iter().map(Self::visit_to_dto).collect(),
        }
    }
}
