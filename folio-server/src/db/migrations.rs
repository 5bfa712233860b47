//! Idempotent schema setup, run at server start and by `folio migrate`

use sqlx::PgPool;

/// Table definitions, applied in order
const TABLES: &[(&str, &str)] = &[
    (
        "skills",
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            proficiency SMALLINT NOT NULL CHECK (proficiency BETWEEN 0 AND 100),
            icon TEXT,
            display_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "projects",
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL,
            tech_stack TEXT[] NOT NULL DEFAULT '{}',
            image_url TEXT,
            live_url TEXT,
            repo_url TEXT,
            featured BOOLEAN NOT NULL DEFAULT FALSE,
            display_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "experiences",
        r#"
        CREATE TABLE IF NOT EXISTS experiences (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            company TEXT NOT NULL,
            role TEXT NOT NULL,
            location TEXT,
            start_date DATE NOT NULL,
            end_date DATE CHECK (end_date IS NULL OR end_date >= start_date),
            description TEXT NOT NULL DEFAULT '',
            highlights TEXT[] NOT NULL DEFAULT '{}',
            display_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "posts",
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            excerpt TEXT,
            content TEXT NOT NULL DEFAULT '',
            cover_image TEXT,
            tags TEXT[] NOT NULL DEFAULT '{}',
            published BOOLEAN NOT NULL DEFAULT FALSE,
            published_at TIMESTAMPTZ,
            seo_title TEXT,
            seo_description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "socials",
        r#"
        CREATE TABLE IF NOT EXISTS socials (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            platform TEXT NOT NULL,
            url TEXT NOT NULL,
            icon TEXT,
            display_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "testimonials",
        r#"
        CREATE TABLE IF NOT EXISTS testimonials (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            author_name TEXT NOT NULL,
            author_title TEXT,
            company TEXT,
            quote TEXT NOT NULL,
            avatar_url TEXT,
            rating SMALLINT CHECK (rating BETWEEN 1 AND 5),
            featured BOOLEAN NOT NULL DEFAULT FALSE,
            display_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "profile",
        r#"
        CREATE TABLE IF NOT EXISTS profile (
            id SMALLINT PRIMARY KEY DEFAULT 1 CHECK (id = 1),
            name TEXT NOT NULL,
            title TEXT NOT NULL,
            tagline TEXT,
            bio TEXT,
            avatar_url TEXT,
            location TEXT,
            email TEXT,
            available_for_work BOOLEAN NOT NULL DEFAULT FALSE,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "resumes",
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            filename TEXT NOT NULL,
            content_type TEXT NOT NULL,
            size_bytes BIGINT NOT NULL,
            stored_name TEXT NOT NULL UNIQUE,
            uploaded_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "contact_messages",
        r#"
        CREATE TABLE IF NOT EXISTS contact_messages (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            subject TEXT,
            message TEXT NOT NULL,
            read BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'editor' CHECK (role IN ('admin', 'editor')),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_skills_category ON skills(category, display_order)",
    "CREATE INDEX IF NOT EXISTS idx_projects_featured ON projects(featured DESC, display_order)",
    "CREATE INDEX IF NOT EXISTS idx_experiences_start ON experiences(start_date DESC)",
    "CREATE INDEX IF NOT EXISTS idx_posts_published ON posts(published_at DESC) WHERE published",
    "CREATE INDEX IF NOT EXISTS idx_posts_tags ON posts USING GIN (tags)",
    "CREATE INDEX IF NOT EXISTS idx_resumes_uploaded ON resumes(uploaded_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_contact_unread ON contact_messages(created_at DESC) WHERE NOT read",
];

/// Create every table and index that doesn't exist yet.
///
/// Requires PostgreSQL 13+ for the built-in `gen_random_uuid()`.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running folio migrations...");

    for (name, ddl) in TABLES {
        tracing::debug!(table = *name, "ensuring table");
        sqlx::query(*ddl).execute(pool).await?;
    }

    for ddl in INDEXES {
        sqlx::query(*ddl).execute(pool).await?;
    }

    tracing::info!(tables = TABLES.len(), "Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_idempotent() {
        for (name, ddl) in TABLES {
            assert!(
                ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", name)),
                "{} ddl must be idempotent and match its name",
                name
            );
        }
        assert!(INDEXES.iter().all(|i| i.contains("IF NOT EXISTS")));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_run_twice() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.unwrap();
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();
    }
}
