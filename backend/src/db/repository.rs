//! Database repository for document operations.
//!
//! Lookups by key always resolve to the first match in store scan order
//! (insertion order). Partial updates are single statements so that each
//! patch is applied atomically by the store.

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Country, CountryFields, Document, Faq, FaqFields, Journal, JournalFields, Message, NewMessage,
};

/// A collection the repository can read back generically.
trait StoredDocument: Document + Sized {
    /// Column list selected for this collection.
    const COLUMNS: &'static str;

    fn from_row(row: &SqliteRow) -> Result<Self, AppError>;
}

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close the underlying pool, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn fetch_all<D: StoredDocument>(&self) -> Result<Vec<D>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY rowid",
            D::COLUMNS,
            D::COLLECTION
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(D::from_row).collect()
    }

    async fn fetch_by_key<D: StoredDocument>(&self, key: &str) -> Result<Option<D>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ? ORDER BY rowid LIMIT 1",
            D::COLUMNS,
            D::COLLECTION,
            D::IDENTITY.key_column()
        );
        let row = sqlx::query(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(D::from_row).transpose()
    }

    /// Delete the first document matching `key`; returns whether one existed.
    async fn delete_by_key<D: StoredDocument>(&self, key: &str) -> Result<bool, AppError> {
        let sql = format!(
            "DELETE FROM {table} WHERE rowid = (SELECT rowid FROM {table} WHERE {column} = ? ORDER BY rowid LIMIT 1)",
            table = D::COLLECTION,
            column = D::IDENTITY.key_column()
        );
        let result = sqlx::query(&sql).bind(key).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    // ==================== COUNTRY OPERATIONS ====================

    /// List all countries.
    pub async fn list_countries(&self) -> Result<Vec<Country>, AppError> {
        self.fetch_all().await
    }

    /// Get the first country whose `id` matches.
    pub async fn find_country(&self, id: &str) -> Result<Option<Country>, AppError> {
        self.fetch_by_key(id).await
    }

    /// Insert a new country document as submitted.
    pub async fn insert_country(&self, fields: CountryFields) -> Result<Country, AppError> {
        let country = fields.into_country(uuid::Uuid::new_v4().to_string());

        sqlx::query(
            "INSERT INTO countries (doc_id, id, hero, discover, info_cards, activities) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&country.doc_id)
        .bind(&country.id)
        .bind(encode_optional(country.hero.as_ref())?)
        .bind(encode_optional(country.discover.as_ref())?)
        .bind(encode_json(&country.info_cards)?)
        .bind(encode_json(&country.activities)?)
        .execute(&self.pool)
        .await?;

        Ok(country)
    }

    /// Merge the present fields of `patch` into the first country matching `id`.
    pub async fn update_country(
        &self,
        id: &str,
        patch: &CountryFields,
    ) -> Result<Option<Country>, AppError> {
        let row = sqlx::query(
            r#"UPDATE countries SET
                id = COALESCE(?, id),
                hero = COALESCE(?, hero),
                discover = COALESCE(?, discover),
                info_cards = COALESCE(?, info_cards),
                activities = COALESCE(?, activities)
            WHERE rowid = (SELECT rowid FROM countries WHERE id = ? ORDER BY rowid LIMIT 1)
            RETURNING doc_id, id, hero, discover, info_cards, activities"#,
        )
        .bind(&patch.id)
        .bind(encode_optional(patch.hero.as_ref())?)
        .bind(encode_optional(patch.discover.as_ref())?)
        .bind(encode_optional(patch.info_cards.as_ref())?)
        .bind(encode_optional(patch.activities.as_ref())?)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Country::from_row).transpose()
    }

    /// Delete the first country matching `id`.
    pub async fn delete_country(&self, id: &str) -> Result<bool, AppError> {
        self.delete_by_key::<Country>(id).await
    }

    // ==================== JOURNAL OPERATIONS ====================

    /// List all journals.
    pub async fn list_journals(&self) -> Result<Vec<Journal>, AppError> {
        self.fetch_all().await
    }

    /// Get a journal by its public `journalId`.
    pub async fn find_journal(&self, journal_id: &str) -> Result<Option<Journal>, AppError> {
        self.fetch_by_key(journal_id).await
    }

    /// Create a journal with a fresh `journalId` and creation timestamp.
    pub async fn insert_journal(&self, fields: JournalFields) -> Result<Journal, AppError> {
        let journal = Journal {
            doc_id: uuid::Uuid::new_v4().to_string(),
            journal_id: uuid::Uuid::new_v4().to_string(),
            journal_title: fields.journal_title,
            countries: None,
            not_travel_related: None,
            start_date: fields.start_date,
            end_date: fields.end_date,
            created_at: Utc::now(),
            images: fields.images.unwrap_or_default(),
            content: fields.content,
        };

        sqlx::query(
            r#"INSERT INTO journals (
                doc_id, journal_id, journal_title, countries, not_travel_related,
                start_date, end_date, created_at, images, content
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&journal.doc_id)
        .bind(&journal.journal_id)
        .bind(&journal.journal_title)
        .bind(encode_optional(journal.countries.as_ref())?)
        .bind(journal.not_travel_related)
        .bind(journal.start_date)
        .bind(journal.end_date)
        .bind(journal.created_at)
        .bind(encode_json(&journal.images)?)
        .bind(&journal.content)
        .execute(&self.pool)
        .await?;

        Ok(journal)
    }

    /// Overwrite the five client-editable fields; omitted fields are cleared.
    pub async fn replace_journal(
        &self,
        journal_id: &str,
        fields: &JournalFields,
    ) -> Result<Option<Journal>, AppError> {
        let row = sqlx::query(
            r#"UPDATE journals SET
                journal_title = ?, start_date = ?, end_date = ?, images = ?, content = ?
            WHERE journal_id = ?
            RETURNING doc_id, journal_id, journal_title, countries, not_travel_related,
                      start_date, end_date, created_at, images, content"#,
        )
        .bind(&fields.journal_title)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(encode_optional(fields.images.as_ref())?)
        .bind(&fields.content)
        .bind(journal_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Journal::from_row).transpose()
    }

    /// Delete a journal by its public `journalId`.
    pub async fn delete_journal(&self, journal_id: &str) -> Result<bool, AppError> {
        self.delete_by_key::<Journal>(journal_id).await
    }

    // ==================== FAQ OPERATIONS ====================

    /// List all FAQs in scan order.
    pub async fn list_faqs(&self) -> Result<Vec<Faq>, AppError> {
        self.fetch_all().await
    }

    /// Insert a new FAQ as submitted.
    pub async fn insert_faq(&self, fields: FaqFields) -> Result<Faq, AppError> {
        let faq = Faq {
            doc_id: uuid::Uuid::new_v4().to_string(),
            category: fields.category,
            question: fields.question,
            answer: fields.answer,
        };

        sqlx::query("INSERT INTO faqs (doc_id, category, question, answer) VALUES (?, ?, ?, ?)")
            .bind(&faq.doc_id)
            .bind(&faq.category)
            .bind(&faq.question)
            .bind(&faq.answer)
            .execute(&self.pool)
            .await?;

        Ok(faq)
    }

    /// Merge the present fields of `patch` into the FAQ with store id `doc_id`.
    pub async fn update_faq(
        &self,
        doc_id: &str,
        patch: &FaqFields,
    ) -> Result<Option<Faq>, AppError> {
        let row = sqlx::query(
            r#"UPDATE faqs SET
                category = COALESCE(?, category),
                question = COALESCE(?, question),
                answer = COALESCE(?, answer)
            WHERE doc_id = ?
            RETURNING doc_id, category, question, answer"#,
        )
        .bind(&patch.category)
        .bind(&patch.question)
        .bind(&patch.answer)
        .bind(doc_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Faq::from_row).transpose()
    }

    /// Delete the FAQ with store id `doc_id`.
    pub async fn delete_faq(&self, doc_id: &str) -> Result<bool, AppError> {
        self.delete_by_key::<Faq>(doc_id).await
    }

    // ==================== MESSAGE OPERATIONS ====================

    /// Store a validated contact message.
    pub async fn insert_message(&self, new: NewMessage) -> Result<Message, AppError> {
        let message = Message {
            doc_id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            message: new.message,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO messages (doc_id, name, email, message, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&message.doc_id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(message.created_at)
        .execute(&self.pool)
        .await?;

        Ok(message)
    }

    /// Count stored contact messages.
    #[cfg(test)]
    pub async fn count_messages(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM messages")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }
}

// Row conversion

impl StoredDocument for Country {
    const COLUMNS: &'static str = "doc_id, id, hero, discover, info_cards, activities";

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        Ok(Country {
            doc_id: row.try_get("doc_id")?,
            id: row.try_get("id")?,
            hero: decode_optional(row.try_get("hero")?)?,
            discover: decode_optional(row.try_get("discover")?)?,
            info_cards: decode_optional(row.try_get("info_cards")?)?.unwrap_or_default(),
            activities: decode_optional(row.try_get("activities")?)?.unwrap_or_default(),
        })
    }
}

impl StoredDocument for Journal {
    const COLUMNS: &'static str = "doc_id, journal_id, journal_title, countries, not_travel_related, start_date, end_date, created_at, images, content";

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        Ok(Journal {
            doc_id: row.try_get("doc_id")?,
            journal_id: row.try_get("journal_id")?,
            journal_title: row.try_get("journal_title")?,
            countries: decode_optional(row.try_get("countries")?)?,
            not_travel_related: row.try_get("not_travel_related")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            created_at: row.try_get("created_at")?,
            images: decode_optional(row.try_get("images")?)?.unwrap_or_default(),
            content: row.try_get("content")?,
        })
    }
}

impl StoredDocument for Faq {
    const COLUMNS: &'static str = "doc_id, category, question, answer";

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        Ok(Faq {
            doc_id: row.try_get("doc_id")?,
            category: row.try_get("category")?,
            question: row.try_get("question")?,
            answer: row.try_get("answer")?,
        })
    }
}

fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string(value)?)
}

fn encode_optional<T: Serialize>(value: Option<&T>) -> Result<Option<String>, AppError> {
    value.map(encode_json).transpose()
}

fn decode_optional<T: DeserializeOwned>(raw: Option<String>) -> Result<Option<T>, AppError> {
    Ok(raw.map(|s| serde_json::from_str(&s)).transpose()?)
}
