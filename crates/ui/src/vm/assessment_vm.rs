use onboard_core::model::{AssessmentAnswers, QUESTIONS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub number: usize,
    pub prompt: &'static str,
    pub options: Vec<(usize, &'static str)>,
    pub selected: Option<usize>,
}

#[must_use]
pub fn map_questions(answers: &AssessmentAnswers) -> Vec<QuestionVm> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionVm {
            index,
            number: index + 1,
            prompt: question.prompt,
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(option, (label, _))| (option, *label))
                .collect(),
            selected: answers.choice(index),
        })
        .collect()
}
