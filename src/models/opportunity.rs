// src/models/opportunity.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Oportunidade de venda. `stage` é texto livre (new/negotiation/closed na UI),
// sempre gravado em minúsculas. `finalized_at` é não-nulo sse `finalized`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Opportunity {
    pub id: Uuid,
    pub title: String,
    #[schema(value_type = f64)]
    pub value: Decimal,
    pub stage: String,
    pub contact_id: Option<Uuid>,
    pub description: Option<String>,
    pub user_id: Uuid,
    pub finalized: bool,
    pub finalized_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// Linha do livro de receita ("receita"): cópia imutável da oportunidade
// no momento da finalização. Nunca é atualizada nem deletada pela API.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct RevenueRecord {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub vendedor_id: Uuid,
    pub opportunity_title: String,
    pub opportunity_description: String,
    #[schema(value_type = f64)]
    pub opportunity_value: Decimal,
    pub finalized_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOpportunityPayload {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Deal1")]
    pub title: String,

    #[schema(value_type = f64, example = 1000.0)]
    pub value: Decimal,

    pub contact_id: Uuid,

    // Ausente => "new"
    pub stage: Option<String>,
    pub description: Option<String>,
}

// PUT /opportunities/{id} — só o estágio (drag-and-drop do kanban).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStagePayload {
    #[validate(length(min = 1, message = "Stage is required"))]
    #[schema(example = "negotiation")]
    pub stage: String,
}

// PUT /opportunities/{id}/parameters — reescreve todos os campos mutáveis.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOpportunityParametersPayload {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[schema(value_type = f64)]
    pub value: Decimal,

    #[validate(length(min = 1, message = "Stage is required"))]
    pub stage: String,

    pub contact_id: Option<Uuid>,
    pub description: Option<String>,
}

// Resposta do finalize: a oportunidade atualizada + a linha de receita criada.
#[derive(Debug, Serialize, ToSchema)]
pub struct FinalizeResponse {
    pub opportunity: Opportunity,
    pub receita: RevenueRecord,
}
