// src/common/patch.rs

// ---
// Regras de "ausência" para PATCH.
//
// Todo campo de PATCH chega como `Option<T>`: chave ausente ou `null` é
// ausência. Por cima disso valem as regras de valor em branco: string vazia e
// zero (fora temperaturas) também não alteram nada.
// ---

/// Temperatura que, em seções, significa "não informado".
pub const ABSENT_TEMPERATURE: f64 = -273.0;

/// Valores que, mesmo presentes, contam como "em branco".
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for i32 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl Blank for i64 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl Blank for f64 {
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

/// Aplica `incoming` em `slot` se estiver presente e não for branco.
pub fn apply<T: Blank>(slot: &mut T, incoming: Option<T>) {
    if let Some(value) = incoming.filter(|v| !v.is_blank()) {
        *slot = value;
    }
}

/// Temperaturas: só a presença conta, zero e negativos são valores válidos.
pub fn apply_temperature(slot: &mut f64, incoming: Option<f64>) {
    if let Some(value) = incoming {
        *slot = value;
    }
}

/// Temperaturas de seção: além da presença, -273 também é "não informado".
pub fn apply_section_temperature(slot: &mut f64, incoming: Option<f64>) {
    apply_temperature(slot, incoming.filter(|v| *v != ABSENT_TEMPERATURE));
}

/// Referências anuláveis: `null` é ausência, então só valores concretos entram.
pub fn apply_reference<T: Blank>(slot: &mut Option<T>, incoming: Option<T>) {
    if let Some(value) = incoming.filter(|v| !v.is_blank()) {
        *slot = Some(value);
    }
}

/// Devolve a nova chave de negócio quando ela de fato muda o valor atual.
///
/// É o gatilho para o serviço refazer a checagem de unicidade.
pub fn changed_key<'a, T>(current: &T, incoming: &'a Option<T>) -> Option<&'a T>
where
    T: Blank + PartialEq,
{
    incoming.as_ref().filter(|v| !v.is_blank() && *v != current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_blank_values_leave_the_slot_alone() {
        let mut name = "Frigorifico".to_string();
        apply(&mut name, None);
        apply(&mut name, Some(String::new()));
        assert_eq!(name, "Frigorifico");

        let mut capacity = 10;
        apply(&mut capacity, Some(0));
        assert_eq!(capacity, 10);

        let mut weight = 2.5;
        apply(&mut weight, Some(0.0));
        assert_eq!(weight, 2.5);
    }

    #[test]
    fn present_values_overwrite() {
        let mut name = "old".to_string();
        apply(&mut name, Some("new".to_string()));
        assert_eq!(name, "new");

        let mut weight = 2.5;
        apply(&mut weight, Some(13.0));
        assert_eq!(weight, 13.0);
    }

    #[test]
    fn zero_is_a_real_temperature() {
        let mut temperature = -18.0;
        apply_temperature(&mut temperature, Some(0.0));
        assert_eq!(temperature, 0.0);

        apply_temperature(&mut temperature, None);
        assert_eq!(temperature, 0.0);
    }

    #[test]
    fn section_temperature_treats_the_sentinel_as_absent() {
        let mut temperature = 4.0;
        apply_section_temperature(&mut temperature, Some(ABSENT_TEMPERATURE));
        assert_eq!(temperature, 4.0);

        apply_section_temperature(&mut temperature, Some(0.0));
        assert_eq!(temperature, 0.0);

        apply_section_temperature(&mut temperature, Some(-30.0));
        assert_eq!(temperature, -30.0);
    }

    #[test]
    fn null_reference_is_preserved() {
        let mut seller: Option<i64> = None;
        apply_reference(&mut seller, None);
        assert_eq!(seller, None);

        apply_reference(&mut seller, Some(3));
        assert_eq!(seller, Some(3));

        apply_reference(&mut seller, None);
        assert_eq!(seller, Some(3));
    }

    #[test]
    fn changed_key_ignores_same_value_and_blanks() {
        let current = "PRD-1".to_string();
        assert_eq!(changed_key(&current, &Some("PRD-1".to_string())), None);
        assert_eq!(changed_key(&current, &Some(String::new())), None);
        assert_eq!(changed_key(&current, &None), None);
        assert_eq!(
            changed_key(&current, &Some("PRD-2".to_string())),
            Some(&"PRD-2".to_string())
        );
    }
}
