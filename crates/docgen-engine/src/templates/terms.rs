//! Termos de Uso prose skeleton

use super::{contact_block, numbered_list, platform_reference};
use shared_types::DocumentRequest;

pub(crate) fn render(data: &DocumentRequest, updated: &str) -> String {
    let label = data.owner_type.tax_id_label();
    let platform = platform_reference(data);

    let mut doc = format!(
        "TERMOS DE USO\n\
         \n\
         Última atualização: {updated}\n\
         \n\
         1. INFORMAÇÕES GERAIS\n\
         \n\
         Estes Termos de Uso regulam a utilização dos serviços oferecidos por {name}, {label} {tax_id}, com sede em {address}, {city} - {region}.\n\
         \n\
         {service}\n\
         \n\
         Ao acessar e utilizar nossos serviços, você concorda integralmente com estes Termos de Uso.\n\
         \n\
         2. OBJETO\n\
         \n\
         2.1. Os presentes Termos de Uso têm por objeto regular a prestação de serviços oferecidos através da plataforma {platform}.\n\
         \n\
         2.2. Os serviços disponibilizados incluem: {service}\n\
         \n\
         3. CADASTRO E CONTA DE ACESSO\n\
         \n\
         3.1. Para utilização dos nossos serviços, o usuário deverá realizar cadastro, fornecendo informações verdadeiras, precisas, atuais e completas.\n\
         \n\
         3.2. O usuário é responsável por manter a confidencialidade de sua senha e conta, bem como por todas as atividades que ocorram sob sua conta.\n\
         \n\
         3.3. O usuário se compromete a notificar imediatamente sobre qualquer uso não autorizado de sua conta.\n\
         \n\
         4. OBRIGAÇÕES DO USUÁRIO\n\
         \n\
         4.1. O usuário se compromete a:\n\
         \x20\x20\x20a) Utilizar os serviços de forma ética e legal;\n\
         \x20\x20\x20b) Não violar direitos de terceiros;\n\
         \x20\x20\x20c) Não utilizar os serviços para fins ilícitos;\n\
         \x20\x20\x20d) Fornecer informações verdadeiras durante o cadastro;\n\
         \x20\x20\x20e) Manter suas informações de cadastro atualizadas.\n\
         \n\
         4.2. É vedado ao usuário:\n\
         \x20\x20\x20a) Copiar, modificar ou distribuir conteúdo da plataforma sem autorização;\n\
         \x20\x20\x20b) Realizar engenharia reversa ou tentar obter código-fonte;\n\
         \x20\x20\x20c) Utilizar scripts ou métodos automatizados não autorizados;\n\
         \x20\x20\x20d) Transmitir vírus ou códigos maliciosos;\n\
         \x20\x20\x20e) Interferir no funcionamento da plataforma.\n\
         \n\
         5. SERVIÇOS OFERECIDOS\n\
         \n\
         5.1. Descrição dos Serviços:\n\
         {service}\n",
        updated = updated,
        name = data.legal_name,
        label = label,
        tax_id = data.tax_id,
        address = data.postal_address,
        city = data.city,
        region = data.region,
        service = data.service_description,
        platform = platform,
    );

    if !data.selected_features.is_empty() {
        doc.push_str(&format!(
            "\n5.2. Funcionalidades Disponíveis:\n{}\n",
            numbered_list(&data.selected_features)
        ));
    }

    doc.push_str(&format!(
        "\n\
         6. PAGAMENTOS E ASSINATURAS\n\
         \n\
         6.1. Os serviços podem ser disponibilizados mediante pagamento, conforme planos descritos na plataforma.\n\
         \n\
         6.2. Os valores e formas de pagamento estão descritos na área de preços da plataforma.\n\
         \n\
         6.3. O não pagamento pode resultar na suspensão ou cancelamento da conta.\n\
         \n\
         6.4. Não há reembolso após a prestação do serviço, exceto nos casos previstos em lei.\n\
         \n\
         7. PROPRIEDADE INTELECTUAL\n\
         \n\
         7.1. Todo conteúdo disponibilizado na plataforma, incluindo mas não se limitando a textos, gráficos, logos, ícones, imagens, clipes de áudio, downloads digitais e software, é de propriedade de {name} ou de seus fornecedores de conteúdo.\n\
         \n\
         7.2. É vedada a reprodução, distribuição, modificação ou uso comercial sem autorização prévia e expressa.\n\
         \n\
         8. PRIVACIDADE E PROTEÇÃO DE DADOS\n\
         \n\
         8.1. A coleta, uso e armazenamento de dados pessoais são regidos pela nossa Política de Privacidade, em conformidade com a Lei Geral de Proteção de Dados (LGPD - Lei 13.709/2018).\n\
         \n\
         8.2. Para questões relacionadas à proteção de dados, entre em contato com nosso Encarregado de Dados (DPO): {dpo}\n\
         \n\
         9. MODIFICAÇÕES DOS TERMOS\n\
         \n\
         9.1. Reservamo-nos o direito de modificar estes Termos de Uso a qualquer momento.\n\
         \n\
         9.2. As alterações entrarão em vigor imediatamente após sua publicação na plataforma.\n\
         \n\
         9.3. O uso continuado dos serviços após as alterações constitui aceitação dos novos termos.\n\
         \n\
         10. RESCISÃO\n\
         \n\
         10.1. O usuário pode cancelar sua conta a qualquer momento através das configurações da plataforma.\n\
         \n\
         10.2. Reservamo-nos o direito de suspender ou encerrar contas que violem estes Termos de Uso.\n\
         \n\
         11. LIMITAÇÃO DE RESPONSABILIDADE\n\
         \n\
         11.1. Não nos responsabilizamos por:\n\
         \x20\x20\x20a) Interrupções ou erros no acesso à plataforma;\n\
         \x20\x20\x20b) Vírus ou componentes prejudiciais transmitidos por terceiros;\n\
         \x20\x20\x20c) Danos decorrentes do uso indevido da plataforma;\n\
         \x20\x20\x20d) Perda de dados causada por falhas técnicas.\n\
         \n\
         11.2. A plataforma é fornecida \"como está\", sem garantias de qualquer tipo.\n\
         \n\
         12. DISPOSIÇÕES GERAIS\n\
         \n\
         12.1. Estes Termos constituem o acordo integral entre as partes.\n\
         \n\
         12.2. A tolerância de uma parte quanto ao descumprimento não constitui novação ou renúncia de direitos.\n\
         \n\
         12.3. Se qualquer disposição for considerada inválida, as demais permanecerão em vigor.\n\
         \n\
         13. LEI APLICÁVEL E FORO\n\
         \n\
         13.1. Estes Termos serão regidos pelas leis da República Federativa do Brasil.\n\
         \n\
         13.2. Fica eleito o foro da comarca de {city} - {region} para dirimir quaisquer controvérsias oriundas destes Termos.\n\
         \n\
         14. CONTATO\n\
         \n\
         Para questões relacionadas a estes Termos, entre em contato:\n\
         {contact}\n\
         \n\
         ---\n\
         \n\
         Ao utilizar nossos serviços, você declara ter lido, compreendido e aceito integralmente estes Termos de Uso.\n\
         \n\
         {name}\n\
         {label}: {tax_id}\n",
        name = data.legal_name,
        label = label,
        tax_id = data.tax_id,
        city = data.city,
        region = data.region,
        dpo = data.dpo_email,
        contact = contact_block(data),
    ));

    doc
}
