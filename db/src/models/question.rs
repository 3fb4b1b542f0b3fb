use chrono::{DateTime, Duration, Utc};
use diesel::{self, pg::Pg, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl NewQuestion {
    pub fn new<S: Into<String>>(question_text: S, pub_date: DateTime<Utc>) -> Self {
        NewQuestion {
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// Publication date is `offset` away from now: negative for the past,
    /// positive for questions that are not published yet.
    pub fn published_in<S: Into<String>>(question_text: S, offset: Duration) -> Self {
        NewQuestion::new(question_text, Utc::now() + offset)
    }
}

impl Question {
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    /// True when `pub_date` falls in `(now - 1 day, now]`.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) < self.pub_date && self.pub_date <= now
    }

    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    pub fn create(conn: &PgConnection, new_question: NewQuestion) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(new_question)
            .get_result(conn)?;

        Ok(question)
    }

    pub fn find_published(
        conn: &PgConnection,
        id: i32,
        published_by: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = published_query(id, published_by).first(conn)?;

        Ok(question)
    }

    pub fn get_latest(
        conn: &PgConnection,
        published_by: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, Error> {
        let latest = latest_query(published_by, limit).load::<Question>(conn)?;

        Ok(latest)
    }
}

fn published_query(id: i32, published_by: DateTime<Utc>) -> questions::BoxedQuery<'static, Pg> {
    use questions::dsl::{id as id_field, pub_date, questions as questions_table};

    questions_table
        .filter(id_field.eq(id))
        .filter(pub_date.le(published_by))
        .into_boxed()
}

// ties go to the most recently inserted
fn latest_query(published_by: DateTime<Utc>, limit: i64) -> questions::BoxedQuery<'static, Pg> {
    use questions::dsl::{id, pub_date, questions as questions_table};

    questions_table
        .filter(pub_date.le(published_by))
        .order((pub_date.desc(), id.desc()))
        .limit(limit)
        .into_boxed()
}
