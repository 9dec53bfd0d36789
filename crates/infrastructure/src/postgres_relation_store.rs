use async_trait::async_trait;
use keyscope_application::RelationStore;
use keyscope_core::{AppError, AppResult, CompanyId, MembershipId};
use keyscope_domain::{ActivityStatus, Company, Membership, PermissionPair, PermissionSet};
use sqlx::{FromRow, PgPool};


/// PostgreSQL-backed read-only view of the credential/role/permission graph.
///
/// Every method is a single bounded read; no transaction spans the calls an
/// authorization check makes, so a grant revoked between the membership
/// lookup and the permission aggregation can still be observed. The check is
/// best-effort consistent by design.
#[derive(Clone)]
pub struct PostgresRelationStore {
    pool: PgPool,
}

impl PostgresRelationStore {
    /// Creates a store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MembershipRow {
    id: i64,
    person_id: i64,
    company_id: i64,
    status: String,
    job_title: Option<String>,
    parent_membership_id: Option<i64>,
}

impl MembershipRow {
    fn into_membership(self) -> AppResult<Membership> {
        let status = ActivityStatus::parse(self.status.as_str()).map_err(|error| {
            AppError::RelationStore(format!(
                "failed to decode status of membership '{}': {error}",
                self.id
            ))
        })?;

        Ok(Membership {
            id: MembershipId::from_i64(self.id),
            person_id: self.person_id,
            company_id: CompanyId::from_i64(self.company_id),
            status,
            job_title: self.job_title,
            parent_membership_id: self.parent_membership_id.map(MembershipId::from_i64),
        })
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    status: String,
}

#[derive(Debug, FromRow)]
struct PermissionPairRow {
    resource_name: String,
    action_name: String,
}

#[async_trait]
impl RelationStore for PostgresRelationStore {
    async fn memberships_for_credential(
        &self,
        credential: &str,
    ) -> AppResult<Vec<Membership>> {
        let rows = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT
                memberships.id,
                memberships.person_id,
                memberships.company_id,
                memberships.status,
                memberships.job_title,
                memberships.parent_membership_id
            FROM credentials
            INNER JOIN memberships
                ON memberships.id = credentials.membership_id
            WHERE credentials.api_key = $1
            ORDER BY memberships.id
            "#,
        )
        .bind(credential)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::RelationStore(format!(
                "failed to load memberships for credential: {error}"
            ))
        })?;

        rows.into_iter().map(MembershipRow::into_membership).collect()
    }

    async fn company_for_membership(
        &self,
        membership: &Membership,
    ) -> AppResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, name, status
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(membership.company_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::RelationStore(format!(
                "failed to resolve company for membership '{}': {error}",
                membership.id
            ))
        })?;

        row.map(|row| {
            let status = ActivityStatus::parse(row.status.as_str()).map_err(|error| {
                AppError::RelationStore(format!(
                    "failed to decode status of company '{}': {error}",
                    row.id
                ))
            })?;

            Ok(Company {
                id: CompanyId::from_i64(row.id),
                name: row.name,
                status,
            })
        })
        .transpose()
    }

    async fn effective_permission_pairs(
        &self,
        credential: &str,
        company_id: CompanyId,
    ) -> AppResult<PermissionSet> {
        // The full six-hop join in one round trip. The same identifier table
        // is joined twice because permissions reference it once as the
        // resource and once as the action.
        let rows = sqlx::query_as::<_, PermissionPairRow>(
            r#"
            SELECT DISTINCT
                resource_objects.name AS resource_name,
                action_objects.name AS action_name
            FROM credentials
            INNER JOIN memberships
                ON memberships.id = credentials.membership_id
            INNER JOIN companies
                ON companies.id = memberships.company_id
            INNER JOIN company_roles
                ON company_roles.company_id = companies.id
            INNER JOIN role_assignments
                ON role_assignments.user_id = credentials.user_id
                AND role_assignments.company_role_id = company_roles.id
            INNER JOIN roles
                ON roles.id = company_roles.role_id
            INNER JOIN role_permissions
                ON role_permissions.role_id = roles.id
            INNER JOIN permissions
                ON permissions.id = role_permissions.permission_id
            INNER JOIN control_objects AS resource_objects
                ON resource_objects.id = permissions.resource_object_id
            INNER JOIN control_objects AS action_objects
                ON action_objects.id = permissions.action_object_id
            WHERE credentials.api_key = $1
                AND memberships.company_id = $2
                AND memberships.status = 'active'
                AND companies.status = 'active'
            "#,
        )
        .bind(credential)
        .bind(company_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::RelationStore(format!(
                "failed to aggregate permissions in company '{company_id}': {error}"
            ))
        })?;

        Ok(rows
            .into_iter()
            .map(|row| PermissionPair::new(row.resource_name, row.action_name))
            .collect())
    }
}
