// src/services/policy.rs
//
// Política de autorização por linha, concentrada num único lugar.
// O código original repetia `if role === 'gestor'` em cada controller;
// aqui toda decisão de papel/posse passa por estas funções puras, e os
// repositórios moldam o SQL a partir do escopo retornado.

use uuid::Uuid;

use crate::models::auth::{AuthUser, Role};

// Tipos de registro gatáveis. Só importa para `can_delete`, onde
// Opportunity tem regra própria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Account,
    Contact,
    Opportunity,
    Task,
    Communication,
}

/// Gestores enxergam os registros de todo mundo.
pub fn can_read_all(actor: &AuthUser) -> bool {
    actor.role == Role::Gestor
}

/// Gestor ou dono pode alterar.
pub fn can_mutate(actor: &AuthUser, owner_id: Uuid) -> bool {
    can_read_all(actor) || actor.id == owner_id
}

/// Igual a `can_mutate`, exceto Opportunity: deletar oportunidade é
/// exclusivo de gestor, posse não conta.
pub fn can_delete(actor: &AuthUser, owner_id: Uuid, resource: Resource) -> bool {
    match resource {
        Resource::Opportunity => actor.role == Role::Gestor,
        _ => can_mutate(actor, owner_id),
    }
}

/// Filtro de dono para listagens e contagens: `None` = sem filtro (gestor),
/// `Some(id)` = só registros do próprio usuário.
pub fn read_scope(actor: &AuthUser) -> Option<Uuid> {
    if can_read_all(actor) {
        None
    } else {
        Some(actor.id)
    }
}

/// Filtro de dono para UPDATE/DELETE. Mesma regra do read_scope; o nome
/// separado marca a intenção. Zero linhas afetadas com o filtro aplicado
/// vira `NotFoundOrForbidden` — o chamador não descobre se o registro
/// existe ou se só não é dele.
pub fn write_scope(actor: &AuthUser) -> Option<Uuid> {
    read_scope(actor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gestor() -> AuthUser {
        AuthUser {
            id: Uuid::new_v4(),
            username: "chefe".into(),
            role: Role::Gestor,
        }
    }

    fn vendedor() -> AuthUser {
        AuthUser {
            id: Uuid::new_v4(),
            username: "alice".into(),
            role: Role::Vendedor,
        }
    }

    #[test]
    fn gestor_le_tudo_vendedor_nao() {
        assert!(can_read_all(&gestor()));
        assert!(!can_read_all(&vendedor()));
    }

    #[test]
    fn vendedor_so_altera_o_que_e_dele() {
        let alice = vendedor();
        let outro = Uuid::new_v4();
        assert!(can_mutate(&alice, alice.id));
        assert!(!can_mutate(&alice, outro));
    }

    #[test]
    fn gestor_altera_registro_de_qualquer_dono() {
        let chefe = gestor();
        assert!(can_mutate(&chefe, Uuid::new_v4()));
    }

    #[test]
    fn delete_segue_a_regra_de_mutacao_exceto_oportunidade() {
        let alice = vendedor();
        let chefe = gestor();

        for resource in [
            Resource::Account,
            Resource::Contact,
            Resource::Task,
            Resource::Communication,
        ] {
            assert!(can_delete(&alice, alice.id, resource));
            assert!(!can_delete(&alice, Uuid::new_v4(), resource));
            assert!(can_delete(&chefe, Uuid::new_v4(), resource));
        }
    }

    #[test]
    fn vendedor_nao_deleta_oportunidade_nem_sendo_dono() {
        let alice = vendedor();
        assert!(!can_delete(&alice, alice.id, Resource::Opportunity));

        let chefe = gestor();
        assert!(can_delete(&chefe, Uuid::new_v4(), Resource::Opportunity));
    }

    #[test]
    fn escopo_de_listagem_por_papel() {
        let chefe = gestor();
        let alice = vendedor();
        assert_eq!(read_scope(&chefe), None);
        assert_eq!(read_scope(&alice), Some(alice.id));
        assert_eq!(write_scope(&chefe), None);
        assert_eq!(write_scope(&alice), Some(alice.id));
    }
}
