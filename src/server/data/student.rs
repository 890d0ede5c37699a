use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::{
    model::student::StudentStatus,
    server::model::student::{RegisterStudentParams, Student, UpdateStudentParams},
};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending student
    pub async fn create(&self, params: RegisterStudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            status: ActiveValue::Set(StudentStatus::Pending.as_str().to_string()),
            training_id: ActiveValue::Set(params.training_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Student::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?
            .map(Student::from_entity)
            .transpose()
    }

    /// Gets all students, optionally restricted to one status, ordered by ID
    pub async fn get_all(&self, status: Option<StudentStatus>) -> Result<Vec<Student>, DbErr> {
        Self::collect(
            with_status(entity::prelude::Student::find(), status)
                .order_by_asc(entity::student::Column::Id)
                .all(self.db)
                .await?,
        )
    }

    /// Gets the students enrolled in a training in enrollment (ID) order
    ///
    /// # Arguments
    /// - `training_id` - Training the students registered for
    /// - `status` - Optional status filter; `Some(Validated)` yields the training's cohort
    pub async fn get_by_training_id(
        &self,
        training_id: i32,
        status: Option<StudentStatus>,
    ) -> Result<Vec<Student>, DbErr> {
        Self::collect(
            with_status(entity::prelude::Student::find(), status)
                .filter(entity::student::Column::TrainingId.eq(training_id))
                .order_by_asc(entity::student::Column::Id)
                .all(self.db)
                .await?,
        )
    }

    /// Gets the students of several trainings, whatever their status, ordered by ID
    pub async fn get_by_training_ids(&self, training_ids: &[i32]) -> Result<Vec<Student>, DbErr> {
        if training_ids.is_empty() {
            return Ok(Vec::new());
        }

        Self::collect(
            entity::prelude::Student::find()
                .filter(entity::student::Column::TrainingId.is_in(training_ids.iter().copied()))
                .order_by_asc(entity::student::Column::Id)
                .all(self.db)
                .await?,
        )
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email is used by a student other than `exclude_id`
    pub async fn email_used_by_other(&self, email: &str, exclude_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .filter(entity::student::Column::Id.ne(exclude_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the editable fields of a student, leaving the status untouched
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(DbErr::RecordNotFound)` - No student with that ID
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, DbErr> {
        let student = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::student::ActiveModel = student.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.training_id = ActiveValue::Set(params.training_id);

        Student::from_entity(active_model.update(self.db).await?)
    }

    /// Deletes a student and, by cascade, their results and queued notifications
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the registration status of a student
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - No student with that ID
    pub async fn set_status(&self, id: i32, status: StudentStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::update_many()
            .col_expr(
                entity::student::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(entity::student::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn collect(entities: Vec<entity::student::Model>) -> Result<Vec<Student>, DbErr> {
        entities.into_iter().map(Student::from_entity).collect()
    }
}

fn with_status(
    query: Select<entity::prelude::Student>,
    status: Option<StudentStatus>,
) -> Select<entity::prelude::Student> {
    match status {
        Some(status) => query.filter(entity::student::Column::Status.eq(status.as_str())),
        None => query,
    }
}
